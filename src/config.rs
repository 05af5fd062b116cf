//! Client configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::search::SEARCH_DEBOUNCE;

/// Settings for [`crate::ChallengeClient`].
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `http://localhost:8080/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Delay before a participant search fires.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("challenge-client/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE.as_millis() as u64
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `challenge.toml` (optional) and `CHALLENGE_*`
    /// environment variables, the latter taking precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("challenge").required(false))
            .add_source(config::Environment::with_prefix("CHALLENGE").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a specific file, still honouring the environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("CHALLENGE").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
