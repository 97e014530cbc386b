//! Client configuration.
//!
//! Defaults point at the public API host; everything can be overridden via
//! environment variables or a config file loaded by the client crate.

use std::env;
use std::time::Duration;

use serde::Deserialize;

/// Public base URL of the API, version 2. Every endpoint starts with this.
pub const DEFAULT_API_BASE: &str = "https://v2.api.noroff.dev";

/// Bounded timeout applied to every request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "SKALD_API_BASE";
/// Environment variable providing the app-wide API key.
pub const ENV_API_KEY: &str = "SKALD_API_KEY";
/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "SKALD_TIMEOUT_SECS";

/// Settings for constructing an API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote API, e.g. `https://v2.api.noroff.dev`.
    pub base_url: String,
    /// Optional app-wide API key, sent as an `X-Api-Key` header.
    pub api_key: Option<String>,
    /// Upper bound on how long a single request may take.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Builds a config from defaults plus environment overrides.
    ///
    /// Recognized variables: `SKALD_API_BASE`, `SKALD_API_KEY`,
    /// `SKALD_TIMEOUT_SECS`. Unset variables keep their defaults; a
    /// non-numeric timeout keeps the default as well.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Applies environment overrides on top of the current values.
    pub fn apply_env(&mut self) {
        if let Ok(base) = env::var(ENV_API_BASE) {
            if !base.trim().is_empty() {
                self.base_url = base;
            }
        }
        if let Ok(key) = env::var(ENV_API_KEY) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                self.timeout = Duration::from_secs(secs);
            }
        }
    }

    /// Merges values read from a config file into this config.
    pub fn apply_file(&mut self, file: ApiConfigFile) {
        if let Some(base) = file.base_url {
            self.base_url = base;
        }
        if let Some(key) = file.api_key {
            self.api_key = Some(key);
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// On-disk shape of the optional config file. All fields are optional so a
/// partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_host() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn file_values_override_defaults() {
        let mut config = ApiConfig::default();
        config.apply_file(ApiConfigFile {
            base_url: Some("http://localhost:3000".into()),
            api_key: Some("key-1".into()),
            timeout_secs: Some(3),
        });
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.api_key.as_deref(), Some("key-1"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut config = ApiConfig::default();
        config.apply_file(ApiConfigFile {
            api_key: Some("key-2".into()),
            ..Default::default()
        });
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.api_key.as_deref(), Some("key-2"));
    }
}
