//! Session persistence.
//!
//! The session store is the client's entire local state: one record holding
//! the access token and the profile handle it was issued for. Presence of a
//! token is the login state. The store is injected into [`ApiClient`] as a
//! trait object so tests and embedders can substitute an in-memory session
//! without touching the real file.
//!
//! [`ApiClient`]: crate::ApiClient

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use skald_core::error::{Result, SkaldError};
use skald_core::model::Session;

use crate::paths;

/// Durable key-value record of `{token, handle}`.
///
/// Invariant: both fields are present or both are absent; `save` writes them
/// as one record and `clear` removes them as one record, so readers never
/// observe a half-set session.
///
/// Failure semantics: reads degrade (a missing or unreadable record is
/// "absent"), writes fail loudly with [`SkaldError::Storage`].
pub trait SessionStore: Send + Sync {
    /// Writes both values as a single record. No validation of the token
    /// format is performed.
    fn save(&self, token: &str, handle: &str) -> Result<()>;

    /// Returns the saved access token, if any.
    fn token(&self) -> Option<String>;

    /// Returns the saved profile handle, if any.
    fn handle(&self) -> Option<String>;

    /// True iff a token is present.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Removes the record. Clearing an already-empty store is a no-op.
    fn clear(&self) -> Result<()>;
}

/// File-backed session store: one JSON file under the platform config
/// directory, written atomically (tmp file + rename) with owner-only
/// permissions on Unix.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default path (`~/.config/skald/session.json`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: paths::session_file()?,
        })
    }

    /// Creates a store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the session file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> Option<Session> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read session file");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "session file is corrupt, treating as logged out");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str, handle: &str) -> Result<()> {
        let session = Session::new(token, handle);
        let content = serde_json::to_string_pretty(&session)
            .map_err(|err| SkaldError::storage(format!("could not encode session: {err}")))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                SkaldError::storage(format!(
                    "could not create {}: {err}",
                    parent.display()
                ))
            })?;
        }

        // tmp file + rename keeps the record whole even if the write dies
        let tmp = self.path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
            }
            Ok(())
        };
        write().map_err(|err| {
            SkaldError::storage(format!(
                "could not write session file {}: {err}",
                self.path.display()
            ))
        })
    }

    fn token(&self) -> Option<String> {
        self.load().map(|session| session.token)
    }

    fn handle(&self) -> Option<String> {
        self.load().map(|session| session.handle)
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SkaldError::storage(format!(
                "could not remove session file {}: {err}",
                self.path.display()
            ))),
        }
    }
}

/// In-memory session store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a session.
    pub fn with_session(token: &str, handle: &str) -> Self {
        Self {
            inner: Mutex::new(Some(Session::new(token, handle))),
        }
    }

    fn read(&self) -> Option<Session> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str, handle: &str) -> Result<()> {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Session::new(token, handle));
        Ok(())
    }

    fn token(&self) -> Option<String> {
        self.read().map(|session| session.token)
    }

    fn handle(&self) -> Option<String> {
        self.read().map(|session| session.handle)
    }

    fn clear(&self) -> Result<()> {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));

        assert!(!store.is_authenticated());

        store.save("tok123", "alice").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok123"));
        assert_eq!(store.handle().as_deref(), Some("alice"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn file_store_clear_removes_both_values() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));

        store.save("tok123", "alice").unwrap();
        store.clear().unwrap();

        assert_eq!(store.token(), None);
        assert_eq!(store.handle(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn clearing_an_empty_store_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_path(temp_dir.path().join("session.json"));
        store.clear().unwrap();
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            FileSessionStore::with_path(temp_dir.path().join("nested").join("session.json"));
        store.save("tok123", "alice").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok123"));
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileSessionStore::with_path(path);
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn saved_file_is_a_plain_session_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        let store = FileSessionStore::with_path(path.clone());
        store.save("tok123", "alice").unwrap();

        let session: Session = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(session, Session::new("tok123", "alice"));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.save("tok123", "alice").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok123"));
        assert_eq!(store.handle().as_deref(), Some("alice"));

        store.clear().unwrap();
        assert_eq!(store.token(), None);
        assert_eq!(store.handle(), None);
    }
}
