//! Request and response types for API endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::storage::{
    BlogFilter, GlossaryFilter, RecordCounts, Severity, ThreatFilter, ToolFilter,
};

/// Query parameters for `GET /api/threats`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ThreatQuery {
    /// Case-insensitive substring of title or description
    #[param(example = "injection")]
    pub search: Option<String>,
    /// Exact severity
    #[param(example = "critical")]
    pub severity: Option<Severity>,
    /// Category name (case-insensitive)
    #[param(example = "Malware")]
    pub category: Option<String>,
}

impl ThreatQuery {
    pub fn to_filter(&self) -> ThreatFilter {
        ThreatFilter {
            search: non_blank(&self.search),
            severity: self.severity,
            category: non_blank(&self.category),
        }
    }
}

/// Query parameters for `GET /api/tools`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ToolQuery {
    /// Category name (case-insensitive)
    #[param(example = "Monitoring")]
    pub category: Option<String>,
    /// Only active (true) or inactive (false) tools
    #[param(example = true)]
    pub active: Option<bool>,
}

impl ToolQuery {
    pub fn to_filter(&self) -> ToolFilter {
        ToolFilter {
            category: non_blank(&self.category),
            active: self.active,
        }
    }
}

/// Query parameters for `GET /api/glossary`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GlossaryQuery {
    /// Case-insensitive substring of term or definition
    #[param(example = "firewall")]
    pub search: Option<String>,
    /// Category name (case-insensitive)
    #[param(example = "Cryptography")]
    pub category: Option<String>,
}

impl GlossaryQuery {
    pub fn to_filter(&self) -> GlossaryFilter {
        GlossaryFilter {
            search: non_blank(&self.search),
            category: non_blank(&self.category),
        }
    }
}

/// Query parameters for `GET /api/blog`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogQuery {
    /// Only published (true) or draft (false) posts
    #[param(example = true)]
    pub published: Option<bool>,
    /// Posts carrying this tag (case-insensitive)
    #[param(example = "network")]
    pub tag: Option<String>,
}

impl BlogQuery {
    pub fn to_filter(&self) -> BlogFilter {
        BlogFilter {
            published: self.published,
            tag: non_blank(&self.tag),
        }
    }
}

/// `?search=` with nothing after it filters nothing
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Password strength check request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PasswordCheckRequest {
    #[schema(example = "Abc12345!")]
    pub password: Option<String>,
}

/// Vulnerability scan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScanRequest {
    /// Host or URL; only echoed back
    #[schema(example = "https://example.com")]
    pub target: Option<String>,
}

/// Health response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Version info response (build-time information)
#[derive(Serialize, ToSchema)]
pub struct VersionResponse {
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "abc1234")]
    pub commit: String,
    #[schema(example = "2025-01-11T00:00:00Z")]
    pub build_date: String,
    #[schema(example = "1.88.0")]
    pub rust_version: String,
    #[schema(example = "stable")]
    pub rust_channel: String,
    #[schema(example = "x86_64-unknown-linux-gnu")]
    pub platform: String,
}

/// Server status response (runtime information)
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "cyberguardian-7d9f")]
    pub hostname: String,
    #[schema(example = "2h 30m 15s")]
    pub uptime: String,
    /// Records currently held per collection
    pub records: RecordCounts,
}

/// Configuration item with env var name
#[derive(Serialize, ToSchema)]
pub struct ConfigItem {
    #[schema(example = "PORT")]
    pub env: String,
    #[schema(example = "3000")]
    pub value: String,
}

impl ConfigItem {
    pub fn new(env: &str, value: impl ToString) -> Self {
        Self {
            env: env.to_string(),
            value: value.to_string(),
        }
    }
}

/// Configuration info response
#[derive(Serialize, ToSchema)]
pub struct ConfigResponse {
    pub items: Vec<ConfigItem>,
}
