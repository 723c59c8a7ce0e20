//! Profile settings read and personal/social-link writes.

use super::*;

impl RemoteClient {
    fn settings_path(user_id: &str) -> String {
        format!("/User/ProfileSettings/{}", user_id)
    }
}

impl ProfileApi for RemoteClient {
    fn fetch_profile(&self, creds: &Credentials) -> Result<ProfileSnapshot, ProfileError> {
        tracing::debug!(user_id = %creds.user_id, "fetch profile settings");
        let sent = self
            .client
            .get(self.url(&Self::settings_path(&creds.user_id)))
            .header(reqwest::header::AUTHORIZATION, self.auth(creds))
            .send();
        let env = self
            .read_envelope(sent, "fetch profile", FETCH_FALLBACK)
            .map_err(ProfileError::Fetch)?;
        env.user
            .ok_or_else(|| ProfileError::Fetch(FETCH_FALLBACK.to_string()))
    }

    fn update_profile(
        &self,
        creds: &Credentials,
        details: &PersonalDetails,
    ) -> Result<(), ProfileError> {
        tracing::debug!(user_id = %creds.user_id, "update profile");
        let sent = self
            .client
            .patch(self.url(&Self::settings_path(&creds.user_id)))
            .header(reqwest::header::AUTHORIZATION, self.auth(creds))
            .json(details)
            .send();
        self.read_envelope(sent, "update profile", UPDATE_FALLBACK)
            .map_err(ProfileError::Mutation)?;
        Ok(())
    }

    fn update_social_links(
        &self,
        creds: &Credentials,
        links: &SocialLinks,
    ) -> Result<(), ProfileError> {
        tracing::debug!(user_id = %creds.user_id, "update social links");
        let sent = self
            .client
            .patch(self.url(&format!(
                "{}/SocialLinks",
                Self::settings_path(&creds.user_id)
            )))
            .header(reqwest::header::AUTHORIZATION, self.auth(creds))
            .json(links)
            .send();
        self.read_envelope(sent, "update social links", LINKS_FALLBACK)
            .map_err(ProfileError::Mutation)?;
        Ok(())
    }

    fn upload_profile_image(
        &self,
        creds: &Credentials,
        image: &ImageFile,
    ) -> Result<String, ProfileError> {
        self.send_profile_image(creds, image, UPLOAD_FALLBACK)
    }

    fn remove_profile_image(&self, creds: &Credentials) -> Result<(), ProfileError> {
        let placeholder = ImageFile::placeholder()?;
        self.send_profile_image(creds, &placeholder, REMOVE_FALLBACK)
            .map(|_| ())
    }
}
