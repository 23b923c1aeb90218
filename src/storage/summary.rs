//! Analytics aggregation for the dashboard overview

use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::models::{AnalyticsSample, Severity, Threat};

/// Per-field sums across all analytics samples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsTotals {
    pub threats: u64,
    pub incidents: u64,
    pub resolved: u64,
    pub pending: u64,
}

/// Number of cataloged threats per severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeverityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCount {
    #[schema(example = "Malware")]
    pub name: String,
    pub count: usize,
}

/// Dashboard overview
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Number of analytics samples aggregated
    pub samples: usize,
    pub totals: AnalyticsTotals,
    /// resolved / incidents as a percentage, one decimal
    #[schema(example = 84.7)]
    pub resolution_rate: f64,
    pub severity: SeverityBreakdown,
    /// Threat count per category, sorted by name
    pub categories: Vec<CategoryCount>,
}

impl AnalyticsTotals {
    pub fn from_samples(samples: &[AnalyticsSample]) -> Self {
        samples.iter().fold(Self::default(), |acc, s| Self {
            threats: acc.threats.saturating_add(s.threats),
            incidents: acc.incidents.saturating_add(s.incidents),
            resolved: acc.resolved.saturating_add(s.resolved),
            pending: acc.pending.saturating_add(s.pending),
        })
    }

    pub fn resolution_rate(&self) -> f64 {
        if self.incidents == 0 {
            return 0.0;
        }
        let percent = self.resolved as f64 / self.incidents as f64 * 100.0;
        (percent * 10.0).round() / 10.0
    }
}

impl SeverityBreakdown {
    pub fn from_threats(threats: &[Threat]) -> Self {
        let mut breakdown = Self::default();
        for threat in threats {
            match threat.severity {
                Severity::Critical => breakdown.critical += 1,
                Severity::High => breakdown.high += 1,
                Severity::Medium => breakdown.medium += 1,
                Severity::Low => breakdown.low += 1,
            }
        }
        breakdown
    }
}

impl AnalyticsSummary {
    pub fn compute(samples: &[AnalyticsSample], threats: &[Threat]) -> Self {
        let totals = AnalyticsTotals::from_samples(samples);

        let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
        for threat in threats {
            *categories.entry(threat.category.as_str()).or_default() += 1;
        }

        Self {
            samples: samples.len(),
            resolution_rate: totals.resolution_rate(),
            totals,
            severity: SeverityBreakdown::from_threats(threats),
            categories: categories
                .into_iter()
                .map(|(name, count)| CategoryCount {
                    name: name.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(date: &str, threats: u64, incidents: u64, resolved: u64, pending: u64) -> AnalyticsSample {
        AnalyticsSample {
            id: date.to_string(),
            date: date.to_string(),
            threats,
            incidents,
            resolved,
            pending,
        }
    }

    fn threat(severity: Severity, category: &str) -> Threat {
        let now = Utc::now();
        Threat {
            id: format!("{severity}-{category}"),
            title: "t".to_string(),
            description: String::new(),
            severity,
            category: category.to_string(),
            mitigation: String::new(),
            tags: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_totals_are_field_sums() {
        let samples = vec![
            sample("2024-01", 45, 12, 10, 2),
            sample("2024-02", 52, 15, 13, 2),
            sample("2024-03", 38, 8, 7, 1),
        ];
        let totals = AnalyticsTotals::from_samples(&samples);
        assert_eq!(
            totals,
            AnalyticsTotals {
                threats: 135,
                incidents: 35,
                resolved: 30,
                pending: 5,
            }
        );
    }

    #[test]
    fn test_resolution_rate_rounds_to_one_decimal() {
        let totals = AnalyticsTotals {
            threats: 0,
            incidents: 78,
            resolved: 66,
            pending: 12,
        };
        // 66 / 78 = 84.615...
        assert_eq!(totals.resolution_rate(), 84.6);
    }

    #[test]
    fn test_resolution_rate_without_incidents() {
        assert_eq!(AnalyticsTotals::default().resolution_rate(), 0.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = AnalyticsSummary::compute(&[], &[]);
        assert_eq!(summary.samples, 0);
        assert_eq!(summary.totals, AnalyticsTotals::default());
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_summary_breakdowns() {
        let threats = vec![
            threat(Severity::High, "Web Application"),
            threat(Severity::Critical, "Malware"),
            threat(Severity::High, "Social Engineering"),
            threat(Severity::Low, "Malware"),
        ];
        let summary = AnalyticsSummary::compute(&[sample("2024-01", 1, 4, 3, 1)], &threats);

        assert_eq!(
            summary.severity,
            SeverityBreakdown {
                critical: 1,
                high: 2,
                medium: 0,
                low: 1,
            }
        );
        let names: Vec<&str> = summary.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Malware", "Social Engineering", "Web Application"]);
        assert_eq!(summary.categories[0].count, 2);
        assert_eq!(summary.resolution_rate, 75.0);
    }
}
