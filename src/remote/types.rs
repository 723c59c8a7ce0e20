//! Response envelopes of the profile API.

use crate::model::ProfileSnapshot;

/// Every response carries `success`; anything but `true` is a failure.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ProfileSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ImageData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub image_url: String,
}

impl Envelope {
    /// Server-supplied failure text, preferring `error` over `message`.
    pub fn failure_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

pub(super) fn failure_message_or(env: Option<&Envelope>, fallback: &str) -> String {
    env.and_then(Envelope::failure_message)
        .unwrap_or(fallback)
        .to_string()
}

pub const FETCH_FALLBACK: &str = "Failed to fetch profile settings";
pub const UPDATE_FALLBACK: &str = "Failed to update profile";
pub const LINKS_FALLBACK: &str = "Failed to update social links";
pub const UPLOAD_FALLBACK: &str = "Failed to upload image";
pub const REMOVE_FALLBACK: &str = "Failed to remove image";

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
