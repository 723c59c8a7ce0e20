use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTICE_DURATION_MS: u64 = 3_000;
pub const DEFAULT_USER_AGENT: &str = "profile-settings";
pub const DEFAULT_ACCOUNT_TYPE: &str = "User";

fn default_notice_duration_ms() -> u64 {
    DEFAULT_NOTICE_DURATION_MS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_account_type() -> String {
    DEFAULT_ACCOUNT_TYPE.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    /// Base URL of the profile API, without a trailing slash.
    pub base_url: String,

    /// How long a notice stays visible.
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            version: 1,
            base_url: base_url.trim_end_matches('/').to_string(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn notice_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notice_duration_ms)
    }
}

/// Persisted login state, read back by `FileSessionProvider`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    pub version: u32,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub token: String,

    #[serde(default = "default_account_type")]
    pub account_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}
