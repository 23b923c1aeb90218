//! Simulated vulnerability scan
//!
//! Always reports the same three findings; the target is only echoed back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FindingSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Finding {
    #[schema(example = "CVE-2024-0001")]
    pub id: String,
    pub severity: FindingSeverity,
    pub title: String,
    pub description: String,
    /// Risk score on a 0-10 scale
    #[schema(example = 8.5)]
    pub risk: f64,
    pub solution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScanSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[schema(example = "https://example.com")]
    pub target: String,
    pub scan_date: DateTime<Utc>,
    pub vulnerabilities: Vec<Finding>,
    pub summary: ScanSummary,
}

impl Finding {
    fn new(
        id: &str,
        severity: FindingSeverity,
        title: &str,
        description: &str,
        risk: f64,
        solution: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            description: description.to_string(),
            risk,
            solution: solution.to_string(),
        }
    }
}

fn canned_findings() -> Vec<Finding> {
    vec![
        Finding::new(
            "CVE-2024-0001",
            FindingSeverity::High,
            "SQL Injection Vulnerability",
            "Potential SQL injection in user input validation",
            8.5,
            "Implement parameterized queries and input validation",
        ),
        Finding::new(
            "CVE-2024-0002",
            FindingSeverity::Medium,
            "Cross-Site Scripting (XSS)",
            "Reflected XSS vulnerability in search functionality",
            6.2,
            "Sanitize user input and implement Content Security Policy",
        ),
        Finding::new(
            "CVE-2024-0003",
            FindingSeverity::Low,
            "Information Disclosure",
            "Server version information exposed in headers",
            3.1,
            "Configure web server to hide version information",
        ),
    ]
}

impl ScanSummary {
    pub fn of(findings: &[Finding]) -> Self {
        let count = |severity: FindingSeverity| {
            findings.iter().filter(|f| f.severity == severity).count()
        };
        Self {
            total: findings.len(),
            high: count(FindingSeverity::High),
            medium: count(FindingSeverity::Medium),
            low: count(FindingSeverity::Low),
        }
    }
}

impl ScanReport {
    pub fn simulate(target: &str, scanned_at: DateTime<Utc>) -> Self {
        let vulnerabilities = canned_findings();
        Self {
            target: target.to_string(),
            scan_date: scanned_at,
            summary: ScanSummary::of(&vulnerabilities),
            vulnerabilities,
        }
    }
}
