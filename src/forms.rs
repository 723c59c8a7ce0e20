//! The two settings form controllers and the plumbing they share.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::{QueryCache, QueryName};
use crate::dispatch::Outcome;
use crate::error::ProfileError;
use crate::loader::ProfileLoader;
use crate::model::ProfileSnapshot;
use crate::notify::{Notice, Notifier, Severity};
use crate::remote::ProfileApi;
use crate::session::{Credentials, Identity, SessionProvider};
use crate::validate::FieldErrors;

mod links;
mod personal;
pub use self::links::SocialLinksForm;
pub use self::personal::PersonalInfoForm;

/// Entries a successful write makes stale.
pub const INVALIDATED_ON_WRITE: &[QueryName] =
    &[QueryName::UserProfile, QueryName::UserProfileSettings];

enum Loaded {
    NoIdentity,
    Unchanged,
    Arrived(Arc<ProfileSnapshot>),
}

struct FormCore<A> {
    api: A,
    cache: QueryCache,
    identity: Identity,
    loader: ProfileLoader,
    notifier: Notifier,
    snapshot: Option<Arc<ProfileSnapshot>>,
    errors: FieldErrors,
    dirty: bool,
}

impl<A: ProfileApi> FormCore<A> {
    fn new(api: A, cache: QueryCache, notice_duration: Duration) -> Self {
        Self {
            api,
            cache,
            identity: Identity::anonymous(),
            loader: ProfileLoader::new(),
            notifier: Notifier::new(notice_duration),
            snapshot: None,
            errors: FieldErrors::new(),
            dirty: false,
        }
    }

    fn activate(&mut self, session: &dyn SessionProvider) {
        self.identity = session.resolve();
        self.snapshot = None;
        self.errors = FieldErrors::new();
        self.dirty = false;
        if self.identity.user_id.is_none() {
            tracing::debug!("no user identity; network disabled");
        }
    }

    fn credentials(&self) -> Option<Credentials> {
        self.identity.credentials()
    }

    /// Loads the snapshot. A cached entry the form already holds is not a new arrival.
    fn fetch(&mut self, now: Instant) -> Result<Loaded, String> {
        let Some(creds) = self.credentials() else {
            return Ok(Loaded::NoIdentity);
        };
        match self.loader.load(&self.api, &self.cache, &creds) {
            Ok(snap) => {
                if self
                    .snapshot
                    .as_ref()
                    .is_some_and(|held| Arc::ptr_eq(held, &snap))
                {
                    return Ok(Loaded::Unchanged);
                }
                if self.dirty {
                    tracing::warn!(
                        user_id = %creds.user_id,
                        "snapshot arrived over unsaved edits; edits discarded"
                    );
                }
                self.snapshot = Some(snap.clone());
                self.dirty = false;
                Ok(Loaded::Arrived(snap))
            }
            Err(err) => Err(self.fail(err, now)),
        }
    }

    fn block(&mut self, errors: FieldErrors, now: Instant) -> Outcome {
        tracing::debug!(fields = errors.len(), "submission blocked by validation");
        let msg = ProfileError::Validation(errors.clone()).user_message();
        self.errors = errors;
        self.notifier.show(Severity::Warning, msg, now);
        Outcome::Blocked
    }

    fn fail(&mut self, err: ProfileError, now: Instant) -> String {
        let msg = err.user_message();
        self.notifier.show(Severity::Error, msg.clone(), now);
        msg
    }

    fn succeed(&mut self, creds: &Credentials, message: &str, now: Instant) -> Outcome {
        tracing::info!(user_id = %creds.user_id, "{}", message);
        self.cache
            .invalidate_all_for(&creds.user_id, INVALIDATED_ON_WRITE);
        self.notifier.show(Severity::Success, message, now);
        Outcome::Done
    }

    fn edited(&mut self, field: crate::validate::Field) {
        self.dirty = true;
        self.errors.clear_field(field);
    }
}

macro_rules! form_accessors {
    ($form:ident) => {
        impl<A: ProfileApi> $form<A> {
            pub fn identity(&self) -> &Identity {
                &self.core.identity
            }

            pub fn snapshot(&self) -> Option<&ProfileSnapshot> {
                self.core.snapshot.as_deref()
            }

            pub fn errors(&self) -> &FieldErrors {
                &self.core.errors
            }

            /// True when the buffer holds edits not yet saved or overwritten.
            pub fn is_dirty(&self) -> bool {
                self.core.dirty
            }

            pub fn is_loading(&self) -> bool {
                self.core.loader.is_loading()
            }

            pub fn loading_flag(&self) -> crate::dispatch::PendingFlag {
                self.core.loader.loading_flag()
            }

            pub fn cache(&self) -> &QueryCache {
                &self.core.cache
            }

            pub fn api(&self) -> &A {
                &self.core.api
            }

            pub fn notice(&mut self, now: Instant) -> Option<&Notice> {
                self.core.notifier.current(now)
            }

            pub fn dismiss_notice(&mut self) {
                self.core.notifier.dismiss();
            }
        }
    };
}

form_accessors!(PersonalInfoForm);
form_accessors!(SocialLinksForm);

#[cfg(test)]
#[path = "tests/forms/mock_api.rs"]
mod mock_api;
#[cfg(test)]
#[path = "tests/forms/personal_tests.rs"]
mod personal_tests;
#[cfg(test)]
#[path = "tests/forms/links_tests.rs"]
mod links_tests;
