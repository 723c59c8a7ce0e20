use super::types::failure_message_or;
use super::*;

impl RemoteClient {
    pub(super) fn auth(&self, creds: &Credentials) -> String {
        format!("Bearer {}", creds.token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Reads the JSON envelope of a response and checks `success`.
    ///
    /// Non-2xx statuses still have their body parsed so a server `error` field reaches the
    /// notice. Transport and parse failures fall back to `fallback`.
    pub(super) fn read_envelope(
        &self,
        sent: reqwest::Result<reqwest::blocking::Response>,
        label: &str,
        fallback: &str,
    ) -> Result<Envelope, String> {
        let resp = match sent {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(op = label, error = %err, "request failed");
                return Err(fallback.to_string());
            }
        };
        let status = resp.status();
        let env = match resp.json::<Envelope>() {
            Ok(env) => Some(env),
            Err(err) => {
                tracing::warn!(op = label, %status, error = %err, "unreadable response body");
                None
            }
        };
        match env {
            Some(env) if status.is_success() && env.success => Ok(env),
            other => {
                let msg = failure_message_or(other.as_ref(), fallback);
                tracing::warn!(op = label, %status, message = %msg, "unsuccessful response");
                Err(msg)
            }
        }
    }
}
