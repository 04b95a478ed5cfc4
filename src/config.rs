use std::path::Path;

use common::DEFAULT_HISTORY_DAYS;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONFIG_FILE: &str = "volstack";
const ENV_PREFIX: &str = "VOLSTACK";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("API URL '{0}' must start with http:// or https://")]
    InvalidUrl(String),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

/// Settings of the native client.
///
/// Layered as defaults, then an optional `volstack.toml` in the working
/// directory, then `VOLSTACK_*` environment variables (after `.env` is
/// loaded). The `--api-url` flag is applied last by the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the forecast service, without trailing slash
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Default window for `history` when `--days` is not given
    pub history_days: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `.env`, `volstack.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(None)
    }

    /// Load with an explicit config file instead of `volstack.toml`
    pub fn from_sources(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("history_days", i64::from(DEFAULT_HISTORY_DAYS))?
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        tracing::debug!(?loaded, "Configuration loaded");
        loaded.validated()
    }

    /// Replace the service URL, e.g. from a command-line flag
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api_url = api_url.into();
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.api_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.api_url));
        }
        self.api_url = url.to_string();

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::NotPositive("request_timeout_secs"));
        }
        if self.history_days == 0 {
            return Err(ConfigError::NotPositive("history_days"));
        }
        Ok(self)
    }
}
