use std::time::{Duration, Instant};

use crate::cache::QueryCache;
use crate::dispatch::{Outcome, PendingFlag};
use crate::edit_buffer::LinksBuffer;
use crate::remote::ProfileApi;
use crate::session::SessionProvider;
use crate::validate::{Field, FieldErrors, validate_links};

use super::{FormCore, Loaded};

pub const MSG_LINKS_SAVED: &str = "Social links updated successfully";

/// LinkedIn, contact email and website.
pub struct SocialLinksForm<A> {
    pub(super) core: FormCore<A>,
    buffer: LinksBuffer,
    saving: PendingFlag,
}

impl<A: ProfileApi> SocialLinksForm<A> {
    pub fn new(api: A, cache: QueryCache, notice_duration: Duration) -> Self {
        Self {
            core: FormCore::new(api, cache, notice_duration),
            buffer: LinksBuffer::default(),
            saving: PendingFlag::new(),
        }
    }

    pub fn activate(&mut self, session: &dyn SessionProvider, now: Instant) -> Outcome {
        self.core.activate(session);
        self.buffer = LinksBuffer::default();
        self.refresh(now)
    }

    pub fn refresh(&mut self, now: Instant) -> Outcome {
        match self.core.fetch(now) {
            Ok(Loaded::Arrived(snap)) => {
                self.buffer.sync_from(&snap);
                Outcome::Done
            }
            Ok(Loaded::Unchanged) => Outcome::Done,
            Ok(Loaded::NoIdentity) => Outcome::Skipped,
            Err(msg) => Outcome::Failed(msg),
        }
    }

    pub fn buffer(&self) -> &LinksBuffer {
        &self.buffer
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let Some(slot) = self.buffer.field_mut(field) else {
            return false;
        };
        *slot = value.into();
        self.core.edited(field);
        true
    }

    pub fn validate(&self) -> FieldErrors {
        validate_links(&self.buffer)
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_pending()
    }

    pub fn saving_flag(&self) -> PendingFlag {
        self.saving.clone()
    }

    pub fn can_submit(&self) -> bool {
        !(self.is_loading() || self.is_saving())
    }

    pub fn save(&mut self, now: Instant) -> Outcome {
        let Some(creds) = self.core.credentials() else {
            return Outcome::Skipped;
        };
        let errors = self.validate();
        if !errors.is_empty() {
            return self.core.block(errors, now);
        }
        self.core.errors = FieldErrors::new();

        let links = self.buffer.to_links();
        let sent = {
            let _saving = self.saving.begin();
            self.core.api.update_social_links(&creds, &links)
        };
        match sent {
            Ok(()) => {
                self.core.dirty = false;
                self.core.succeed(&creds, MSG_LINKS_SAVED, now)
            }
            Err(err) => Outcome::Failed(self.core.fail(err, now)),
        }
    }
}
