use serde::{Deserialize, Serialize};
use std::{env, time::Duration};
use thiserror::Error;
use url::Url;

/// Base URL of the address API.
pub const API_URL_VAR: &str = "ADDRESS_API_URL";
/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "ADDRESS_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

lazy_static! {
    static ref DEFAULT_API_URL: Url = Url::parse("http://localhost:8080").unwrap();
}

/// Connection settings for the address API.
///
/// The API also proxies CEP lookups, see [`Backend`](crate::provider::Backend).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Root of the API. Resource paths such as `/api/usuarios` are appended to it.
    pub api_url: Url,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.clone(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn new(api_url: Url) -> Self {
        Config {
            api_url,
            ..Default::default()
        }
    }

    /// Load from `ADDRESS_API_URL` and `ADDRESS_API_TIMEOUT_SECS`, falling back to
    /// the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(raw) = lookup(API_URL_VAR) {
            config.api_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
                var: API_URL_VAR,
                source,
            })?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout_secs = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    #[error("ADDRESS_API_TIMEOUT_SECS must be a whole number of seconds, got '{0}'")]
    InvalidTimeout(String),
}
