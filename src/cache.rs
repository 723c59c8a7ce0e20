//! Snapshot cache keyed by query name and user id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::ProfileSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryName {
    /// List-level profile used outside the settings page.
    UserProfile,
    /// Detail-level snapshot backing the settings forms.
    UserProfileSettings,
}

impl QueryName {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryName::UserProfile => "userProfile",
            QueryName::UserProfileSettings => "userProfileSettings",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub name: QueryName,
    pub user_id: String,
}

impl QueryKey {
    pub fn new(name: QueryName, user_id: &str) -> Self {
        Self {
            name,
            user_id: user_id.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    snapshot: Arc<ProfileSnapshot>,
    stale: bool,
}

/// Shared handle; clones see the same entries. Entries are only ever replaced whole.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, CacheEntry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, CacheEntry>> {
        // Entries are replaced whole, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the entry only if it has not been invalidated.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<Arc<ProfileSnapshot>> {
        self.lock()
            .get(key)
            .filter(|e| !e.stale)
            .map(|e| e.snapshot.clone())
    }

    pub fn replace(&self, key: QueryKey, snapshot: Arc<ProfileSnapshot>) {
        self.lock().insert(
            key,
            CacheEntry {
                snapshot,
                stale: false,
            },
        );
    }

    /// Marks the entry stale. Returns false if there was nothing cached.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        match self.lock().get_mut(key) {
            Some(entry) => {
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    pub fn invalidate_all_for(&self, user_id: &str, names: &[QueryName]) {
        for name in names {
            let key = QueryKey::new(*name, user_id);
            if self.invalidate(&key) {
                tracing::debug!(query = name.as_str(), user_id, "invalidated cached snapshot");
            }
        }
    }

    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.lock().get(key).map(|e| e.stale)
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
