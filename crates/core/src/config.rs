//! Runtime configuration for the cart store and its collaborators.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ROCKETSHOES_API_URL` - Base URL of the catalog/stock API (default: `http://localhost:3333`)
//! - `ROCKETSHOES_STORAGE_PATH` - JSON file backing the key-value storage (default: `rocketshoes-cart.json`)
//! - `ROCKETSHOES_STORAGE_KEY` - Key the cart snapshot is stored under (default: `@RocketShoes:cart`)
//! - `ROCKETSHOES_TIMEOUT_SECS` - Per-request HTTP timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::CartError;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "rocketshoes-cart.json";
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_URL: &str = "ROCKETSHOES_API_URL";
const ENV_STORAGE_PATH: &str = "ROCKETSHOES_STORAGE_PATH";
const ENV_STORAGE_KEY: &str = "ROCKETSHOES_STORAGE_KEY";
const ENV_TIMEOUT_SECS: &str = "ROCKETSHOES_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Base URL every API path is joined onto. Stored without a trailing slash.
    pub api_base_url: String,
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub request_timeout: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CartConfig {
    /// Build a config from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, CartError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CartError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config = config.with_api_base_url(url)?;
        }
        if let Some(path) = lookup(ENV_STORAGE_PATH) {
            config.storage_path = PathBuf::from(path);
        }
        if let Some(key) = lookup(ENV_STORAGE_KEY) {
            if key.trim().is_empty() {
                return Err(CartError::Config {
                    key: ENV_STORAGE_KEY.into(),
                    message: "storage key must not be empty".into(),
                });
            }
            config.storage_key = key;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| CartError::Config {
                key: ENV_TIMEOUT_SECS.into(),
                message: format!("expected a whole number of seconds, got '{secs}'"),
            })?;
            if secs == 0 {
                return Err(CartError::Config {
                    key: ENV_TIMEOUT_SECS.into(),
                    message: "timeout must be at least one second".into(),
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the API base URL. Only `http://` and `https://` are accepted.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Result<Self, CartError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CartError::Config {
                key: ENV_API_URL.into(),
                message: format!("'{url}' is not an http(s) URL"),
            });
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }
}
