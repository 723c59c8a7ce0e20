use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ClientConfig, SessionFile};

const SETTINGS_DIR: &str = ".profile-settings";
const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

pub const URL_ENV: &str = "PROFILE_SETTINGS_URL";

/// Local settings directory holding `config.json` and `session.json`.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    root: PathBuf,
}

impl SettingsStore {
    pub fn default_dir(base: &Path) -> PathBuf {
        base.join(SETTINGS_DIR)
    }

    /// Uses `dir` as-is; it is created on first write.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { root: dir.into() }
    }

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let root = dir.into();
        if !root.is_dir() {
            return Err(anyhow!(
                "No settings directory found at {} (run `profile-settings login`)",
                root.display()
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.root.join(CONFIG_FILE);
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let mut cfg: ClientConfig =
            serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        if let Ok(url) = std::env::var(URL_ENV)
            && !url.trim().is_empty()
        {
            cfg.base_url = url.trim().trim_end_matches('/').to_string();
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn write_session(&self, session: &SessionFile) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(session).context("serialize session")?;
        write_atomic(&self.session_path(), &bytes).context("write session.json")?;
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
