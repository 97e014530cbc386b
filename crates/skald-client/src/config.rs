//! Configuration loading.
//!
//! Priority, lowest to highest: built-in defaults, then
//! `~/.config/skald/config.json`, then environment variables
//! (`SKALD_API_BASE`, `SKALD_API_KEY`, `SKALD_TIMEOUT_SECS`). A missing
//! config file is fine; an unreadable or invalid one is an error so a typo
//! does not silently fall back to the public host.

use std::fs;
use std::path::Path;

use skald_core::config::{ApiConfig, ApiConfigFile};
use skald_core::error::{Result, SkaldError};

use crate::paths;

/// Loads the effective client configuration.
pub fn load_config() -> Result<ApiConfig> {
    let mut config = ApiConfig::default();
    let path = paths::config_file()?;
    if path.exists() {
        config.apply_file(read_config_file(&path)?);
    }
    config.apply_env();
    Ok(config)
}

/// Reads and parses a config file.
pub fn read_config_file(path: &Path) -> Result<ApiConfigFile> {
    let content = fs::read_to_string(path).map_err(|err| {
        SkaldError::config(format!(
            "failed to read configuration file at {}: {err}",
            path.display()
        ))
    })?;
    serde_json::from_str(&content).map_err(|err| {
        SkaldError::config(format!(
            "failed to parse configuration file at {}: {err}",
            path.display()
        ))
    })
}
