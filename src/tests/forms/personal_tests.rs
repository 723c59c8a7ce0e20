use std::time::{Duration, Instant};

use super::mock_api::{Call, MockApi, alice};
use crate::cache::{QueryCache, QueryKey, QueryName};
use crate::dispatch::Outcome;
use crate::error::ProfileError;
use crate::model::{PersonalDetails, ProfileSnapshot};
use crate::notify::Severity;
use crate::photo::{ImageFile, MAX_IMAGE_BYTES, PLACEHOLDER_FILE_NAME};
use crate::session::{Identity, StaticSession};
use crate::validate::Field;
use crate::PersonalInfoForm;

const NOTICE: Duration = Duration::from_secs(3);

fn session() -> StaticSession {
    StaticSession(Identity::user("u1", "token-1"))
}

fn active_form(api: MockApi, now: Instant) -> PersonalInfoForm<MockApi> {
    let mut form = PersonalInfoForm::new(api, QueryCache::new(), NOTICE);
    assert_eq!(form.activate(&session(), now), Outcome::Done);
    form
}

fn png(len: usize) -> ImageFile {
    ImageFile::new("me.png", "image/png", vec![7; len])
}

#[test]
fn anonymous_session_never_touches_the_network() {
    let now = Instant::now();
    let mut form = PersonalInfoForm::new(MockApi::new(alice()), QueryCache::new(), NOTICE);
    assert_eq!(
        form.activate(&StaticSession(Identity::anonymous()), now),
        Outcome::Skipped
    );
    form.set_field(Field::FullName, "Alice");
    form.set_field(Field::Email, "a@b.com");
    assert_eq!(form.save(now), Outcome::Skipped);
    assert_eq!(form.upload_photo(&png(10), now), Outcome::Skipped);
    assert_eq!(form.delete_photo(now), Outcome::Skipped);

    assert!(form.api().calls().is_empty());
    assert!(form.notice(now).is_none());
}

#[test]
fn activation_fills_buffer_from_snapshot() {
    let now = Instant::now();
    let form = active_form(MockApi::new(alice()), now);
    let buf = form.buffer();
    assert_eq!(buf.full_name, "Alice Smith");
    assert_eq!(buf.email, "alice@example.com");
    assert_eq!(buf.address, "1 Main Street");
    assert_eq!(buf.phone_number, "+1 555 0100");
    assert_eq!(buf.description, "");
    assert_eq!(form.photo().shown(), Some("https://cdn.example.com/alice.png"));
    assert_eq!(form.api().calls(), vec![Call::Fetch("u1".to_string())]);
    assert!(!form.is_loading());
}

#[test]
fn cached_snapshot_is_reused_across_activations() {
    let now = Instant::now();
    let cache = QueryCache::new();
    let mut first = PersonalInfoForm::new(MockApi::new(alice()), cache.clone(), NOTICE);
    first.activate(&session(), now);

    let mut second = PersonalInfoForm::new(MockApi::new(alice()), cache, NOTICE);
    assert_eq!(second.activate(&session(), now), Outcome::Done);
    assert_eq!(second.api().fetches(), 0);
    assert_eq!(second.buffer().full_name, "Alice Smith");
}

#[test]
fn loading_flag_is_set_while_fetching() {
    let now = Instant::now();
    let mut form = PersonalInfoForm::new(MockApi::new(alice()), QueryCache::new(), NOTICE);
    *form.api().watch.borrow_mut() = Some(form.loading_flag());
    form.activate(&session(), now);
    assert_eq!(*form.api().pending_seen.borrow(), vec![true]);
    assert!(!form.is_loading());
}

#[test]
fn invalid_buffer_blocks_save_without_request() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    form.set_field(Field::FullName, "A");
    form.set_field(Field::Email, "bad");

    assert_eq!(form.save(now), Outcome::Blocked);
    assert!(form.api().writes().is_empty());

    let errors = form.errors();
    assert!(
        errors
            .get(Field::FullName)
            .unwrap()
            .contains("must be at least 2 characters")
    );
    assert!(errors.get(Field::Email).unwrap().contains("valid email address"));

    let notice = form.notice(now).cloned().unwrap();
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(notice.message, "Please fix the errors in the form");
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    form.set_field(Field::FullName, "");
    form.set_field(Field::Email, "");
    form.save(now);
    assert_eq!(form.errors().len(), 2);

    form.set_field(Field::Email, "still bad");
    assert!(!form.errors().contains(Field::Email));
    assert!(form.errors().contains(Field::FullName));
    assert!(!form.set_field(Field::Website, "https://x.dev"));
}

#[test]
fn valid_save_sends_fields_and_invalidates_both_queries() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    let list_key = QueryKey::new(QueryName::UserProfile, "u1");
    let detail_key = QueryKey::new(QueryName::UserProfileSettings, "u1");
    form.cache()
        .replace(list_key.clone(), std::sync::Arc::new(ProfileSnapshot::default()));

    form.set_field(Field::FullName, "Alice Smith");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Address, "");
    form.set_field(Field::PhoneNumber, "");
    form.set_field(Field::Description, "");
    assert!(form.validate().is_empty());
    assert!(form.is_dirty());

    assert_eq!(form.save(now), Outcome::Done);
    assert_eq!(
        form.api().writes(),
        vec![Call::UpdateProfile(PersonalDetails {
            full_name: "Alice Smith".to_string(),
            email: "a@b.com".to_string(),
            address: String::new(),
            phone_number: String::new(),
            description: String::new(),
        })]
    );
    assert_eq!(form.cache().is_stale(&list_key), Some(true));
    assert_eq!(form.cache().is_stale(&detail_key), Some(true));
    assert!(!form.is_dirty());
    assert!(form.errors().is_empty());

    let notice = form.notice(now).cloned().unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.message, "Profile updated successfully");
}

#[test]
fn saving_flag_is_visible_during_request() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    *form.api().watch.borrow_mut() = Some(form.saving_flag());
    form.save(now);
    assert_eq!(*form.api().pending_seen.borrow(), vec![true]);
    assert!(!form.is_saving());
    assert!(form.can_submit());
}

#[test]
fn failed_save_shows_server_message_and_keeps_buffer() {
    let now = Instant::now();
    let api = MockApi::new(alice());
    *api.update_reply.borrow_mut() =
        Err(ProfileError::Mutation("Email already in use".to_string()));
    let mut form = active_form(api, now);
    form.set_field(Field::Email, "taken@example.com");

    assert_eq!(
        form.save(now),
        Outcome::Failed("Email already in use".to_string())
    );
    assert_eq!(form.buffer().email, "taken@example.com");
    assert!(form.is_dirty());
    let detail_key = QueryKey::new(QueryName::UserProfileSettings, "u1");
    assert_eq!(form.cache().is_stale(&detail_key), Some(false));

    let notice = form.notice(now).cloned().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "Email already in use");

    // The form stays usable.
    *form.api().update_reply.borrow_mut() = Ok(());
    assert_eq!(form.save(now), Outcome::Done);
}

#[test]
fn refetch_after_invalidation_overwrites_unsaved_edits() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    form.cache()
        .invalidate(&QueryKey::new(QueryName::UserProfileSettings, "u1"));
    form.set_field(Field::FullName, "Unsaved Name");

    assert_eq!(form.refresh(now), Outcome::Done);
    assert_eq!(form.api().fetches(), 2);
    assert_eq!(form.buffer().full_name, "Alice Smith");
    assert!(!form.is_dirty());
}

#[test]
fn fetch_failure_is_reported_and_not_fatal() {
    let now = Instant::now();
    let api = MockApi::new(alice());
    *api.fetch_reply.borrow_mut() = Err(ProfileError::Fetch("User not found".to_string()));
    let mut form = PersonalInfoForm::new(api, QueryCache::new(), NOTICE);

    assert_eq!(
        form.activate(&session(), now),
        Outcome::Failed("User not found".to_string())
    );
    assert!(form.snapshot().is_none());
    assert_eq!(form.buffer().full_name, "");
    assert_eq!(form.notice(now).unwrap().message, "User not found");

    form.set_field(Field::FullName, "Bob Jones");
    form.set_field(Field::Email, "bob@example.com");
    assert_eq!(form.save(now), Outcome::Done);
}

#[test]
fn disallowed_upload_type_is_rejected_locally() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    let pdf = ImageFile::new("cv.pdf", "application/pdf", vec![1; 100]);

    assert_eq!(form.upload_photo(&pdf, now), Outcome::Blocked);
    assert!(form.api().writes().is_empty());
    assert!(
        form.notice(now)
            .unwrap()
            .message
            .starts_with("Invalid file type")
    );
    assert_eq!(form.photo().shown(), Some("https://cdn.example.com/alice.png"));
}

#[test]
fn oversized_upload_is_rejected_locally() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);

    assert_eq!(form.upload_photo(&png(MAX_IMAGE_BYTES + 1), now), Outcome::Blocked);
    assert!(form.api().writes().is_empty());
    assert_eq!(
        form.notice(now).unwrap().message,
        "File size must be less than 5MB"
    );
}

#[test]
fn failed_upload_reverts_to_previous_server_photo() {
    let now = Instant::now();
    let api = MockApi::new(alice());
    *api.upload_reply.borrow_mut() =
        Err(ProfileError::Mutation("Storage unavailable".to_string()));
    let mut form = active_form(api, now);

    assert_eq!(
        form.upload_photo(&png(64), now),
        Outcome::Failed("Storage unavailable".to_string())
    );
    assert_eq!(form.api().writes(), vec![Call::Upload(png(64))]);
    assert_eq!(form.photo().shown(), Some("https://cdn.example.com/alice.png"));
    assert_eq!(form.notice(now).unwrap().severity, Severity::Error);
}

#[test]
fn failed_upload_without_photo_reverts_to_empty() {
    let now = Instant::now();
    let api = MockApi::new(ProfileSnapshot {
        profile_image: None,
        ..alice()
    });
    *api.upload_reply.borrow_mut() =
        Err(ProfileError::Mutation("Failed to upload image".to_string()));
    let mut form = active_form(api, now);

    form.upload_photo(&png(64), now);
    assert_eq!(form.photo().shown(), None);
}

#[test]
fn successful_upload_replaces_preview_and_invalidates() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    *form.api().watch.borrow_mut() = Some(form.uploading_flag());

    assert_eq!(form.upload_photo(&png(64), now), Outcome::Done);
    assert_eq!(*form.api().pending_seen.borrow(), vec![true]);
    assert_eq!(form.photo().shown(), Some("https://cdn.example.com/new.png"));
    assert_eq!(
        form.cache()
            .is_stale(&QueryKey::new(QueryName::UserProfileSettings, "u1")),
        Some(true)
    );
    assert_eq!(
        form.notice(now).unwrap().message,
        "Profile photo updated successfully"
    );
}

#[test]
fn delete_uploads_placeholder_and_clears_preview() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);

    assert_eq!(form.delete_photo(now), Outcome::Done);
    let writes = form.api().writes();
    assert_eq!(writes.len(), 1);
    match &writes[0] {
        Call::Upload(file) => {
            assert_eq!(file.file_name, PLACEHOLDER_FILE_NAME);
            assert_eq!(file.mime, "image/png");
        }
        other => panic!("unexpected call {:?}", other),
    }
    assert_eq!(form.photo().shown(), None);
    assert_eq!(
        form.notice(now).unwrap().message,
        "Profile photo removed successfully"
    );
}

#[test]
fn failed_delete_keeps_preview() {
    let now = Instant::now();
    let api = MockApi::new(alice());
    *api.upload_reply.borrow_mut() =
        Err(ProfileError::Mutation("Failed to remove image".to_string()));
    let mut form = active_form(api, now);

    assert!(matches!(form.delete_photo(now), Outcome::Failed(_)));
    assert_eq!(form.photo().shown(), Some("https://cdn.example.com/alice.png"));
}

#[test]
fn notices_expire_and_can_be_dismissed() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    form.save(now);
    assert!(form.notice(now + Duration::from_secs(1)).is_some());
    assert!(form.notice(now + NOTICE).is_none());

    form.save(now);
    form.dismiss_notice();
    assert!(form.notice(now).is_none());
}

#[test]
fn cached_refresh_keeps_unsaved_edits() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    form.set_field(Field::FullName, "Edited Name");

    assert_eq!(form.refresh(now), Outcome::Done);
    assert_eq!(form.api().fetches(), 1);
    assert_eq!(form.buffer().full_name, "Edited Name");
    assert!(form.is_dirty());
}

#[test]
fn anonymous_upload_still_runs_local_checks() {
    let now = Instant::now();
    let mut form = PersonalInfoForm::new(MockApi::new(alice()), QueryCache::new(), NOTICE);
    form.activate(&StaticSession(Identity::anonymous()), now);
    let bmp = ImageFile::new("a.bmp", "image/bmp", vec![1; 16]);

    assert_eq!(form.upload_photo(&bmp, now), Outcome::Blocked);
    let notice = form.notice(now).cloned().unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.message.starts_with("Invalid file type"));
    assert!(form.api().calls().is_empty());
}

#[test]
fn failed_upload_reverts_to_previously_uploaded_photo() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    assert_eq!(form.upload_photo(&png(64), now), Outcome::Done);

    *form.api().upload_reply.borrow_mut() =
        Err(ProfileError::Mutation("Failed to upload image".to_string()));
    assert!(matches!(form.upload_photo(&png(32), now), Outcome::Failed(_)));
    assert_eq!(form.photo().shown(), Some("https://cdn.example.com/new.png"));
}

#[test]
fn removing_flag_is_visible_during_delete() {
    let now = Instant::now();
    let mut form = active_form(MockApi::new(alice()), now);
    *form.api().watch.borrow_mut() = Some(form.removing_flag());
    form.delete_photo(now);
    assert_eq!(*form.api().pending_seen.borrow(), vec![true]);
    assert!(!form.is_removing());
}
