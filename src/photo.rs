//! Profile photo pre-checks, local previews and the removal placeholder.

use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ProfileError;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/svg+xml",
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
];

pub const MSG_INVALID_TYPE: &str =
    "Invalid file type. Please upload an SVG, PNG, JPG, GIF or WebP image";
pub const MSG_TOO_LARGE: &str = "File size must be less than 5MB";

// 1x1 transparent PNG sent in place of a delete call.
const PLACEHOLDER_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
pub const PLACEHOLDER_FILE_NAME: &str = "placeholder.png";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Reads a file from disk, taking the MIME type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self {
            mime: mime_for_path(path).to_string(),
            file_name,
            bytes,
        })
    }

    pub fn placeholder() -> Result<Self, ProfileError> {
        let bytes = STANDARD
            .decode(PLACEHOLDER_PNG_B64)
            .map_err(|e| ProfileError::Mutation(format!("placeholder image: {}", e)))?;
        Ok(Self::new(PLACEHOLDER_FILE_NAME, "image/png", bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:` URL shown as the preview before the upload completes.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Type first, then size. Rejected files never reach the network.
pub fn precheck(file: &ImageFile) -> Result<(), ProfileError> {
    if !ALLOWED_IMAGE_TYPES.contains(&file.mime.as_str()) {
        return Err(ProfileError::UploadRejected(MSG_INVALID_TYPE.to_string()));
    }
    if file.len() > MAX_IMAGE_BYTES {
        return Err(ProfileError::UploadRejected(MSG_TOO_LARGE.to_string()));
    }
    Ok(())
}

/// What the form shows as the profile photo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoPreview {
    shown: Option<String>,
    server: Option<String>,
}

impl PhotoPreview {
    pub fn shown(&self) -> Option<&str> {
        self.shown.as_deref()
    }

    pub fn server_url(&self) -> Option<&str> {
        self.server.as_deref()
    }

    /// Adopts the photo from a fresh snapshot.
    pub fn sync_server(&mut self, url: Option<&str>) {
        self.server = url.map(str::to_string);
        self.shown = self.server.clone();
    }

    pub fn show_local(&mut self, data_url: String) {
        self.shown = Some(data_url);
    }

    pub fn confirm(&mut self, url: String) {
        self.server = Some(url.clone());
        self.shown = Some(url);
    }

    /// Compensates a failed upload: back to the last server photo, or nothing.
    pub fn revert(&mut self) {
        self.shown = self.server.clone();
    }

    pub fn clear(&mut self) {
        self.server = None;
        self.shown = None;
    }
}

#[cfg(test)]
#[path = "tests/photo_tests.rs"]
mod tests;
