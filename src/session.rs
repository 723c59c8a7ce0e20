//! Resolves the active user and bearer token from persisted session state.

use std::path::PathBuf;

use crate::model::{DEFAULT_ACCOUNT_TYPE, SessionFile};

/// Who the forms act as. `user_id == None` disables all network activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<String>,
    pub token: String,
    pub account_type: String,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            token: String::new(),
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
        }
    }

    pub fn user(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            token: token.into(),
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        let user_id = self.user_id.as_deref().filter(|id| !id.trim().is_empty())?;
        Some(Credentials {
            user_id: user_id.to_string(),
            token: self.token.clone(),
            account_type: self.account_type.clone(),
        })
    }
}

impl From<SessionFile> for Identity {
    fn from(s: SessionFile) -> Self {
        Self {
            user_id: s.user_id.filter(|id| !id.trim().is_empty()),
            token: s.token,
            account_type: s.account_type,
        }
    }
}

/// Identity with a user id present; what the network operations take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: String,
    pub token: String,
    pub account_type: String,
}

pub trait SessionProvider {
    /// Never fails: absent or unreadable state resolves to `Identity::anonymous()`.
    fn resolve(&self) -> Identity;
}

/// Reads `session.json` written by `profile-settings login`.
#[derive(Clone, Debug)]
pub struct FileSessionProvider {
    path: PathBuf,
}

impl FileSessionProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionProvider for FileSessionProvider {
    fn resolve(&self) -> Identity {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Identity::anonymous();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "read session");
                return Identity::anonymous();
            }
        };
        match serde_json::from_slice::<SessionFile>(&bytes) {
            Ok(s) => Identity::from(s),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "parse session");
                Identity::anonymous()
            }
        }
    }
}

/// Fixed identity, for embedding and tests.
#[derive(Clone, Debug)]
pub struct StaticSession(pub Identity);

impl SessionProvider for StaticSession {
    fn resolve(&self) -> Identity {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
