use std::sync::Arc;

use crate::cache::{QueryCache, QueryKey, QueryName};
use crate::dispatch::PendingFlag;
use crate::error::ProfileError;
use crate::model::ProfileSnapshot;
use crate::remote::ProfileApi;
use crate::session::Credentials;

/// Reads the settings snapshot through the shared cache.
#[derive(Clone, Debug, Default)]
pub struct ProfileLoader {
    loading: PendingFlag,
}

impl ProfileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_pending()
    }

    pub fn loading_flag(&self) -> PendingFlag {
        self.loading.clone()
    }

    pub fn key(creds: &Credentials) -> QueryKey {
        QueryKey::new(QueryName::UserProfileSettings, &creds.user_id)
    }

    /// A fresh cached snapshot is returned as-is; otherwise the API is asked and the entry
    /// replaced.
    pub fn load<A: ProfileApi + ?Sized>(
        &self,
        api: &A,
        cache: &QueryCache,
        creds: &Credentials,
    ) -> Result<Arc<ProfileSnapshot>, ProfileError> {
        let key = Self::key(creds);
        if let Some(snap) = cache.get_fresh(&key) {
            return Ok(snap);
        }
        let snap = {
            let _loading = self.loading.begin();
            Arc::new(api.fetch_profile(creds)?)
        };
        cache.replace(key, snap.clone());
        Ok(snap)
    }
}
