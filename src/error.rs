//! Error taxonomy for profile loading and mutations.

use thiserror::Error;

use crate::validate::FieldErrors;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// No user id in the session; network activity is disabled.
    #[error("no user identity in session")]
    IdentityMissing,

    /// A read request failed or returned an unsuccessful envelope.
    #[error("{0}")]
    Fetch(String),

    /// Local field violations; never sent to the network.
    #[error("{} field(s) failed validation", .0.len())]
    Validation(FieldErrors),

    /// A write request failed or returned an unsuccessful envelope.
    #[error("{0}")]
    Mutation(String),

    /// Client-side upload pre-check failure; never sent to the network.
    #[error("{0}")]
    UploadRejected(String),
}

impl ProfileError {
    /// Text suitable for a notice.
    pub fn user_message(&self) -> String {
        match self {
            ProfileError::Validation(_) => crate::validate::BLOCKED_SUBMISSION_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
