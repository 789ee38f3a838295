//! Application configuration loaded from environment variables.
//!
//! The backend base URL is deliberately optional: when it is absent the
//! application runs fully offline and every submission stays local.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the civic backend. `None` means fully-offline mode.
    pub backend_url: Option<String>,
    /// Path of the persisted session file.
    pub session_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CIVIC_BACKEND_URL`: backend base URL; unset or empty means offline.
    /// `CIVIC_SESSION_FILE`: session file path; defaults to
    /// `$HOME/.civic-sense/session.json` (or `./.civic-sense/session.json`
    /// when `HOME` is unset).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let backend_url = env::var("CIVIC_BACKEND_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let session_path = env::var("CIVIC_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_path());

        Ok(Self {
            backend_url,
            session_path,
        })
    }

    /// Config for tests: offline, session file in a scratch location.
    pub fn test_default() -> Self {
        Self {
            backend_url: None,
            session_path: std::env::temp_dir().join("civic-sense-test-session.json"),
        }
    }
}

fn default_session_path() -> PathBuf {
    let base = env::var("HOME").map(PathBuf::from).unwrap_or_default();
    base.join(".civic-sense").join("session.json")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
