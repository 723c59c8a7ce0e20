use std::path::Path;

use profile_settings::photo::ImageFile;

use super::*;

pub(super) fn handle_upload_command(store: &SettingsStore, path: &Path) -> Result<()> {
    let file = ImageFile::from_path(path)?;
    let mut form = personal_form(store)?;
    let now = Instant::now();
    let outcome = form.upload_photo(&file, now);
    if let Some(url) = form.photo().server_url().filter(|_| outcome.is_done()) {
        println!("photo: {}", url);
    }
    finish(outcome, form.notice(now), &FieldErrors::new())
}

pub(super) fn handle_delete_command(store: &SettingsStore) -> Result<()> {
    let mut form = personal_form(store)?;
    let now = Instant::now();
    let outcome = form.delete_photo(now);
    finish(outcome, form.notice(now), &FieldErrors::new())
}
