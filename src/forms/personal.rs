use std::time::{Duration, Instant};

use crate::cache::QueryCache;
use crate::dispatch::{Outcome, PendingFlag};
use crate::edit_buffer::PersonalBuffer;
use crate::photo::{self, ImageFile, PhotoPreview};
use crate::remote::ProfileApi;
use crate::session::SessionProvider;
use crate::validate::{Field, FieldErrors, validate_personal};

use super::{FormCore, Loaded};

pub const MSG_PROFILE_SAVED: &str = "Profile updated successfully";
pub const MSG_PHOTO_UPLOADED: &str = "Profile photo updated successfully";
pub const MSG_PHOTO_REMOVED: &str = "Profile photo removed successfully";

/// Personal info (name, contact, description) plus the profile photo.
pub struct PersonalInfoForm<A> {
    pub(super) core: FormCore<A>,
    buffer: PersonalBuffer,
    photo: PhotoPreview,
    saving: PendingFlag,
    uploading: PendingFlag,
    removing: PendingFlag,
}

impl<A: ProfileApi> PersonalInfoForm<A> {
    pub fn new(api: A, cache: QueryCache, notice_duration: Duration) -> Self {
        Self {
            core: FormCore::new(api, cache, notice_duration),
            buffer: PersonalBuffer::default(),
            photo: PhotoPreview::default(),
            saving: PendingFlag::new(),
            uploading: PendingFlag::new(),
            removing: PendingFlag::new(),
        }
    }

    /// Resolves the identity once, starts from an empty buffer and loads.
    pub fn activate(&mut self, session: &dyn SessionProvider, now: Instant) -> Outcome {
        self.core.activate(session);
        self.buffer = PersonalBuffer::default();
        self.photo = PhotoPreview::default();
        self.refresh(now)
    }

    /// Loads the snapshot (cached unless invalidated) and overwrites the buffer with it.
    pub fn refresh(&mut self, now: Instant) -> Outcome {
        match self.core.fetch(now) {
            Ok(Loaded::Arrived(snap)) => {
                self.buffer.sync_from(&snap);
                self.photo.sync_server(snap.photo_url());
                Outcome::Done
            }
            Ok(Loaded::Unchanged) => Outcome::Done,
            Ok(Loaded::NoIdentity) => Outcome::Skipped,
            Err(msg) => Outcome::Failed(msg),
        }
    }

    pub fn buffer(&self) -> &PersonalBuffer {
        &self.buffer
    }

    /// Applies one edit and clears that field's error. Returns false for fields this form
    /// does not own.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let Some(slot) = self.buffer.field_mut(field) else {
            return false;
        };
        *slot = value.into();
        self.core.edited(field);
        true
    }

    pub fn validate(&self) -> FieldErrors {
        validate_personal(&self.buffer)
    }

    pub fn photo(&self) -> &PhotoPreview {
        &self.photo
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_pending()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.is_pending()
    }

    pub fn is_removing(&self) -> bool {
        self.removing.is_pending()
    }

    pub fn saving_flag(&self) -> PendingFlag {
        self.saving.clone()
    }

    pub fn uploading_flag(&self) -> PendingFlag {
        self.uploading.clone()
    }

    pub fn removing_flag(&self) -> PendingFlag {
        self.removing.clone()
    }

    /// Whether the view should enable its controls.
    pub fn can_submit(&self) -> bool {
        !(self.is_loading() || self.is_saving() || self.is_uploading() || self.is_removing())
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

        let details = self.buffer.to_details();
        let sent = {
            let _saving = self.saving.begin();
            self.core.api.update_profile(&creds, &details)
        };
        match sent {
            Ok(()) => {
                self.core.dirty = false;
                self.core.succeed(&creds, MSG_PROFILE_SAVED, now)
            }
            Err(err) => Outcome::Failed(self.core.fail(err, now)),
        }
    }

    /// Pre-checks (even without an identity), shows a local preview, then uploads. A failed upload puts the last
    /// server photo back.
    pub fn upload_photo(&mut self, file: &ImageFile, now: Instant) -> Outcome {
        if let Err(err) = photo::precheck(file) {
            self.core.fail(err, now);
            return Outcome::Blocked;
        }
        let Some(creds) = self.core.credentials() else {
            return Outcome::Skipped;
        };
        self.photo.show_local(file.data_url());

        let sent = {
            let _uploading = self.uploading.begin();
            self.core.api.upload_profile_image(&creds, file)
        };
        match sent {
            Ok(url) => {
                self.photo.confirm(url);
                self.core.succeed(&creds, MSG_PHOTO_UPLOADED, now)
            }
            Err(err) => {
                self.photo.revert();
                Outcome::Failed(self.core.fail(err, now))
            }
        }
    }

    pub fn delete_photo(&mut self, now: Instant) -> Outcome {
        let Some(creds) = self.core.credentials() else {
            return Outcome::Skipped;
        };
        let sent = {
            let _removing = self.removing.begin();
            self.core.api.remove_profile_image(&creds)
        };
        match sent {
            Ok(()) => {
                self.photo.clear();
                self.core.succeed(&creds, MSG_PHOTO_REMOVED, now)
            }
            Err(err) => Outcome::Failed(self.core.fail(err, now)),
        }
    }
}
