//! Storage layer for CyberGuardian
//!
//! Process-local, in-memory collections. Nothing is persisted; state resets
//! on restart.
//!
//! # Module Structure
//! - `collection`: generic record collection and the `Record` trait
//! - `error`: storage error type
//! - `filters`: list filters for the catalog collections
//! - `ids`: identifier generators
//! - `models`: record, create and patch types
//! - `store`: the repository owning all collections
//! - `summary`: analytics aggregation

mod collection;
mod error;
mod filters;
mod ids;
mod models;
mod store;
mod summary;

// Re-export public types
pub use collection::{Collection, Mutable, Record};
pub use error::StoreError;
pub use filters::{BlogFilter, GlossaryFilter, ThreatFilter, ToolFilter};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use models::{
    AnalyticsSample, AnalyticsSamplePatch, BlogPost, BlogPostPatch, GlossaryTerm,
    GlossaryTermPatch, NewAnalyticsSample, NewBlogPost, NewGlossaryTerm, NewThreat, NewTool,
    NewUser, Role, Severity, Threat, ThreatPatch, Tool, ToolPatch, User,
};
pub use store::{Holds, RecordCounts, Store};
pub use summary::{AnalyticsSummary, AnalyticsTotals, CategoryCount, SeverityBreakdown};
