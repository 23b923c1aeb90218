//! Generic in-memory record collection

use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::StoreError;

/// A record kind held in a [`Collection`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Client-supplied fields for creation
    type New;

    /// Name used in not-found messages
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Assemble a record from a fresh id, the creation time and client data
    fn build(id: String, now: DateTime<Utc>, new: Self::New) -> Self;
}

/// Record kinds that can be patched and deleted after creation.
///
/// Users are create-only:
///
/// ```compile_fail
/// use cyberguardian::storage::{SequentialIdGenerator, Store, User};
///
/// let store = Store::new(Box::new(SequentialIdGenerator::new()));
/// store.delete::<User>("1");
/// ```
pub trait Mutable: Record {
    /// Partial update; `None` fields are left untouched
    type Patch;

    /// Shallow-merge `patch` into the record
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// Insertion-ordered records behind a single lock.
///
/// Every operation takes the lock once, so each call is atomic with respect
/// to the others. A poisoned lock is recovered: the data is plain values and
/// no operation leaves it half-written.
pub struct Collection<R> {
    items: RwLock<Vec<R>>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<R>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<R>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, record: R) -> R {
        self.write().push(record.clone());
        record
    }

    pub fn all(&self) -> Vec<R> {
        self.read().clone()
    }

    pub fn filtered(&self, keep: impl Fn(&R) -> bool) -> Vec<R> {
        self.read().iter().filter(|&r| keep(r)).cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<R> {
        self.find(|r| r.id() == id)
    }

    pub fn find(&self, matches: impl Fn(&R) -> bool) -> Option<R> {
        self.read().iter().find(|&r| matches(r)).cloned()
    }

    pub fn update(&self, id: &str, patch: R::Patch, now: DateTime<Utc>) -> Result<R, StoreError>
    where
        R: Mutable,
    {
        let mut items = self.write();
        let record = items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: R::KIND,
                id: id.to_string(),
            })?;
        record.apply(patch, now);
        Ok(record.clone())
    }

    /// Remove by id; `false` when nothing matched
    pub fn remove(&self, id: &str) -> bool {
        let mut items = self.write();
        match items.iter().position(|r| r.id() == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
