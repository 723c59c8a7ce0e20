use reqwest::blocking::multipart;

use super::*;

const IMAGE_PATH: &str = "/User/Profile/Image";

impl RemoteClient {
    /// Multipart `PATCH` of `{image, accountType, id}`.
    pub(super) fn send_profile_image(
        &self,
        creds: &Credentials,
        image: &ImageFile,
        fallback: &str,
    ) -> Result<String, ProfileError> {
        tracing::debug!(
            user_id = %creds.user_id,
            file = %image.file_name,
            bytes = image.len(),
            "upload profile image"
        );
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)
            .map_err(|e| {
                tracing::warn!(mime = %image.mime, error = %e, "bad image mime");
                ProfileError::Mutation(fallback.to_string())
            })?;
        let form = multipart::Form::new()
            .part("image", part)
            .text("accountType", creds.account_type.clone())
            .text("id", creds.user_id.clone());

        let sent = self
            .client
            .patch(self.url(IMAGE_PATH))
            .header(reqwest::header::AUTHORIZATION, self.auth(creds))
            .multipart(form)
            .send();
        let env = self
            .read_envelope(sent, "upload profile image", fallback)
            .map_err(ProfileError::Mutation)?;
        env.data
            .map(|d| d.image_url)
            .ok_or_else(|| ProfileError::Mutation(fallback.to_string()))
    }
}
