//! List filters for the catalog collections
//!
//! Every field is optional; an empty filter keeps everything.

use super::models::{BlogPost, GlossaryTerm, Severity, Threat, Tool};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn same_label(value: &str, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|w| value.eq_ignore_ascii_case(w))
}

#[derive(Debug, Default, Clone)]
pub struct ThreatFilter {
    /// Substring of title or description
    pub search: Option<String>,
    pub severity: Option<Severity>,
    pub category: Option<String>,
}

impl ThreatFilter {
    pub fn matches(&self, threat: &Threat) -> bool {
        let search = self.search.as_deref().is_none_or(|s| {
            contains_ignore_case(&threat.title, s) || contains_ignore_case(&threat.description, s)
        });
        let severity = self.severity.is_none_or(|s| threat.severity == s);
        search && severity && same_label(&threat.category, self.category.as_deref())
    }
}

#[derive(Debug, Default, Clone)]
pub struct GlossaryFilter {
    /// Substring of term or definition
    pub search: Option<String>,
    pub category: Option<String>,
}

impl GlossaryFilter {
    pub fn matches(&self, term: &GlossaryTerm) -> bool {
        let search = self.search.as_deref().is_none_or(|s| {
            contains_ignore_case(&term.term, s) || contains_ignore_case(&term.definition, s)
        });
        search && same_label(&term.category, self.category.as_deref())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ToolFilter {
    pub category: Option<String>,
    pub active: Option<bool>,
}

impl ToolFilter {
    pub fn matches(&self, tool: &Tool) -> bool {
        self.active.is_none_or(|a| tool.is_active == a)
            && same_label(&tool.category, self.category.as_deref())
    }
}

#[derive(Debug, Default, Clone)]
pub struct BlogFilter {
    pub published: Option<bool>,
    pub tag: Option<String>,
}

impl BlogFilter {
    pub fn matches(&self, post: &BlogPost) -> bool {
        let tag = self
            .tag
            .as_deref()
            .is_none_or(|t| post.tags.iter().any(|tag| tag.eq_ignore_ascii_case(t)));
        tag && self.published.is_none_or(|p| post.published == p)
    }
}
