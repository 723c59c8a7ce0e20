use anyhow::{Context, Result};

use crate::error::ProfileError;
use crate::model::{ClientConfig, PersonalDetails, ProfileSnapshot, SocialLinks};
use crate::photo::ImageFile;
use crate::session::Credentials;

mod http_client;

mod types;
pub use self::types::*;
mod image;
mod profile;

/// The profile REST API as the forms see it.
pub trait ProfileApi {
    fn fetch_profile(&self, creds: &Credentials) -> Result<ProfileSnapshot, ProfileError>;

    /// Any echoed record is ignored; callers invalidate and refetch.
    fn update_profile(
        &self,
        creds: &Credentials,
        details: &PersonalDetails,
    ) -> Result<(), ProfileError>;

    fn update_social_links(
        &self,
        creds: &Credentials,
        links: &SocialLinks,
    ) -> Result<(), ProfileError>;

    /// Returns the stored image URL.
    fn upload_profile_image(
        &self,
        creds: &Credentials,
        image: &ImageFile,
    ) -> Result<String, ProfileError>;

    /// There is no delete endpoint; removal uploads a fixed placeholder image.
    fn remove_profile_image(&self, creds: &Credentials) -> Result<(), ProfileError> {
        let placeholder = ImageFile::placeholder()?;
        self.upload_profile_image(creds, &placeholder).map(|_| ())
    }
}

pub struct RemoteClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
