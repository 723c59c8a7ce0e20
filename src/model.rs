use serde::{Deserialize, Serialize};

mod config;
pub use self::config::*;

/// Server-authoritative profile record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub social_links: Option<SocialLinksSnapshot>,

    #[serde(default, alias = "imageUrl")]
    pub profile_image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinksSnapshot {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ProfileSnapshot {
    /// Photo URL, with an empty string treated as "no photo".
    pub fn photo_url(&self) -> Option<&str> {
        self.profile_image.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body of `PATCH /User/ProfileSettings/{userId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub description: String,
}

/// Body of `PATCH /User/ProfileSettings/{userId}/SocialLinks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub email: String,
    pub website: String,
}
