//! Record types with their create and patch payloads
//!
//! Records serialize with camelCase field names, which is the wire format the
//! dashboard client consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::collection::{Mutable, Record};

/// Assign `$field` from the patch when present
macro_rules! merge {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

// ============================================
// Enumerations
// ============================================

/// Threat severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

// ============================================
// Users
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[schema(example = "admin@cyberguardian.com")]
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub role: Role,
}

impl Record for User {
    type New = NewUser;
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, now: DateTime<Utc>, new: NewUser) -> Self {
        Self {
            id,
            email: new.email,
            name: new.name,
            role: new.role,
            created_at: now,
        }
    }
}

// ============================================
// Threats
// ============================================

/// A cataloged security risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Threat {
    pub id: String,
    #[schema(example = "Phishing Attacks")]
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[schema(example = "Social Engineering")]
    pub category: String,
    pub mitigation: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewThreat {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[schema(example = "Phishing Attacks")]
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[schema(example = "Social Engineering")]
    pub category: String,
    pub mitigation: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThreatPatch {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Severity>,
    pub category: Option<String>,
    pub mitigation: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Record for Threat {
    type New = NewThreat;
    const KIND: &'static str = "Threat";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, now: DateTime<Utc>, new: NewThreat) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            severity: new.severity,
            category: new.category,
            mitigation: new.mitigation,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Mutable for Threat {
    type Patch = ThreatPatch;

    fn apply(&mut self, patch: ThreatPatch, now: DateTime<Utc>) {
        merge!(self, patch, title, description, severity, category, mitigation, tags);
        self.updated_at = now;
    }
}

// ============================================
// Tools
// ============================================

/// A catalog entry describing a security capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    #[schema(example = "Password Strength Checker")]
    pub name: String,
    pub description: String,
    #[schema(example = "Authentication")]
    pub category: String,
    #[schema(example = "Shield")]
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub is_active: bool,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTool {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
    pub is_active: bool,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolPatch {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
    pub is_active: Option<bool>,
    pub features: Option<Vec<String>>,
}

impl Record for Tool {
    type New = NewTool;
    const KIND: &'static str = "Tool";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _now: DateTime<Utc>, new: NewTool) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            category: new.category,
            icon: new.icon,
            url: new.url,
            is_active: new.is_active,
            features: new.features,
        }
    }
}

impl Mutable for Tool {
    type Patch = ToolPatch;

    fn apply(&mut self, patch: ToolPatch, _now: DateTime<Utc>) {
        if patch.url.is_some() {
            self.url = patch.url;
        }
        merge!(self, patch, name, description, category, icon, is_active, features);
    }
}

// ============================================
// Glossary
// ============================================

/// A dictionary entry; related terms are free text, never resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    pub id: String,
    #[schema(example = "Firewall")]
    pub term: String,
    pub definition: String,
    #[schema(example = "Network Security")]
    pub category: String,
    pub related_terms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGlossaryTerm {
    #[validate(length(min = 1, message = "Term must not be empty"))]
    pub term: String,
    pub definition: String,
    pub category: String,
    pub related_terms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTermPatch {
    #[validate(length(min = 1, message = "Term must not be empty"))]
    pub term: Option<String>,
    pub definition: Option<String>,
    pub category: Option<String>,
    pub related_terms: Option<Vec<String>>,
}

impl Record for GlossaryTerm {
    type New = NewGlossaryTerm;
    const KIND: &'static str = "Glossary term";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _now: DateTime<Utc>, new: NewGlossaryTerm) -> Self {
        Self {
            id,
            term: new.term,
            definition: new.definition,
            category: new.category,
            related_terms: new.related_terms,
        }
    }
}

impl Mutable for GlossaryTerm {
    type Patch = GlossaryTermPatch;

    fn apply(&mut self, patch: GlossaryTermPatch, _now: DateTime<Utc>) {
        merge!(self, patch, term, definition, category, related_terms);
    }
}

// ============================================
// Blog
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    pub tags: Vec<String>,
    pub published: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl Record for BlogPost {
    type New = NewBlogPost;
    const KIND: &'static str = "Blog post";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, now: DateTime<Utc>, new: NewBlogPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            excerpt: new.excerpt,
            author: new.author,
            tags: new.tags,
            published: new.published,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Mutable for BlogPost {
    type Patch = BlogPostPatch;

    fn apply(&mut self, patch: BlogPostPatch, now: DateTime<Utc>) {
        merge!(self, patch, title, content, excerpt, author, tags, published);
        self.updated_at = now;
    }
}

// ============================================
// Analytics
// ============================================

/// Monthly aggregate of threat and incident counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSample {
    pub id: String,
    /// Period label
    #[schema(example = "2024-01")]
    pub date: String,
    pub threats: u64,
    pub incidents: u64,
    pub resolved: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAnalyticsSample {
    #[validate(length(min = 1, message = "Date must not be empty"))]
    #[schema(example = "2024-01")]
    pub date: String,
    pub threats: u64,
    pub incidents: u64,
    pub resolved: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSamplePatch {
    #[validate(length(min = 1, message = "Date must not be empty"))]
    pub date: Option<String>,
    pub threats: Option<u64>,
    pub incidents: Option<u64>,
    pub resolved: Option<u64>,
    pub pending: Option<u64>,
}

impl Record for AnalyticsSample {
    type New = NewAnalyticsSample;
    const KIND: &'static str = "Analytics sample";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _now: DateTime<Utc>, new: NewAnalyticsSample) -> Self {
        Self {
            id,
            date: new.date,
            threats: new.threats,
            incidents: new.incidents,
            resolved: new.resolved,
            pending: new.pending,
        }
    }
}

impl Mutable for AnalyticsSample {
    type Patch = AnalyticsSamplePatch;

    fn apply(&mut self, patch: AnalyticsSamplePatch, _now: DateTime<Utc>) {
        merge!(self, patch, date, threats, incidents, resolved, pending);
    }
}
