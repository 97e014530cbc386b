//! Path resolution for skald's local files.
//!
//! Everything the client persists lives under the platform config directory:
//!
//! ```text
//! ~/.config/skald/
//! ├── config.json    # optional API overrides (base URL, API key, timeout)
//! └── session.json   # the saved session (token + handle)
//! ```

use std::path::PathBuf;

use skald_core::error::{Result, SkaldError};

const APP_DIR: &str = "skald";
const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

/// Returns the skald configuration directory, e.g. `~/.config/skald/`.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| SkaldError::config("Could not determine the user config directory"))
}

/// Returns the path to the optional config file.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Returns the path to the saved session file.
pub fn session_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(SESSION_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_config_dir() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(APP_DIR));
        assert!(config_file().unwrap().starts_with(&dir));
        assert!(session_file().unwrap().ends_with(SESSION_FILE));
    }
}
