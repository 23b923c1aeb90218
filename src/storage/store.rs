//! The repository owning every collection

use chrono::Utc;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use super::collection::{Collection, Mutable, Record};
use super::error::StoreError;
use super::filters::{BlogFilter, GlossaryFilter, ThreatFilter, ToolFilter};
use super::ids::IdGenerator;
use super::models::{AnalyticsSample, BlogPost, GlossaryTerm, Threat, Tool, User};
use super::summary::AnalyticsSummary;

/// Access to the collection holding records of kind `R`
pub trait Holds<R: Record> {
    fn collection(&self) -> &Collection<R>;
}

/// In-memory store for all six record kinds.
///
/// Created once per process and shared with the HTTP layer through an `Arc`.
pub struct Store {
    ids: Box<dyn IdGenerator>,
    users: Collection<User>,
    threats: Collection<Threat>,
    tools: Collection<Tool>,
    glossary: Collection<GlossaryTerm>,
    blog_posts: Collection<BlogPost>,
    analytics: Collection<AnalyticsSample>,
}

/// Number of records per collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub users: usize,
    pub threats: usize,
    pub tools: usize,
    pub glossary_terms: usize,
    pub blog_posts: usize,
    pub analytics_samples: usize,
}

macro_rules! holds {
    ($record:ty, $field:ident) => {
        impl Holds<$record> for Store {
            fn collection(&self) -> &Collection<$record> {
                &self.$field
            }
        }
    };
}

holds!(User, users);
holds!(Threat, threats);
holds!(Tool, tools);
holds!(GlossaryTerm, glossary);
holds!(BlogPost, blog_posts);
holds!(AnalyticsSample, analytics);

impl Store {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            ids,
            users: Collection::new(),
            threats: Collection::new(),
            tools: Collection::new(),
            glossary: Collection::new(),
            blog_posts: Collection::new(),
            analytics: Collection::new(),
        }
    }

    /// Store a new record under a fresh id
    pub fn create<R: Record>(&self, new: R::New) -> R
    where
        Self: Holds<R>,
    {
        let record = R::build(self.ids.next_id(), Utc::now(), new);
        debug!(kind = R::KIND, id = %record.id(), "Record created");
        Holds::<R>::collection(self).insert(record)
    }

    pub fn list<R: Record>(&self) -> Vec<R>
    where
        Self: Holds<R>,
    {
        Holds::<R>::collection(self).all()
    }

    pub fn get<R: Record>(&self, id: &str) -> Option<R>
    where
        Self: Holds<R>,
    {
        Holds::<R>::collection(self).get(id)
    }

    pub fn update<R: Mutable>(&self, id: &str, patch: R::Patch) -> Result<R, StoreError>
    where
        Self: Holds<R>,
    {
        let record = Holds::<R>::collection(self).update(id, patch, Utc::now())?;
        debug!(kind = R::KIND, id = %id, "Record updated");
        Ok(record)
    }

    /// Delete by id; `false` when the id is unknown. Nothing cascades.
    pub fn delete<R: Mutable>(&self, id: &str) -> bool
    where
        Self: Holds<R>,
    {
        let removed = Holds::<R>::collection(self).remove(id);
        debug!(kind = R::KIND, id = %id, removed = removed, "Record delete processed");
        removed
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.users.find(|u| u.email == email)
    }

    pub fn threats_matching(&self, filter: &ThreatFilter) -> Vec<Threat> {
        self.threats.filtered(|t| filter.matches(t))
    }

    pub fn tools_matching(&self, filter: &ToolFilter) -> Vec<Tool> {
        self.tools.filtered(|t| filter.matches(t))
    }

    pub fn glossary_matching(&self, filter: &GlossaryFilter) -> Vec<GlossaryTerm> {
        self.glossary.filtered(|t| filter.matches(t))
    }

    pub fn blog_posts_matching(&self, filter: &BlogFilter) -> Vec<BlogPost> {
        self.blog_posts.filtered(|p| filter.matches(p))
    }

    pub fn analytics_summary(&self) -> AnalyticsSummary {
        AnalyticsSummary::compute(&self.analytics.all(), &self.threats.all())
    }

    pub fn counts(&self) -> RecordCounts {
        RecordCounts {
            users: self.users.len(),
            threats: self.threats.len(),
            tools: self.tools.len(),
            glossary_terms: self.glossary.len(),
            blog_posts: self.blog_posts.len(),
            analytics_samples: self.analytics.len(),
        }
    }
}
