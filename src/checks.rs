//! Computed security tools: password strength and the canned scan

pub mod password;
pub mod scan;

pub use password::{PasswordChecks, PasswordReport, Strength};
pub use scan::{Finding, FindingSeverity, ScanReport, ScanSummary};
