//! Key/value backends for the session: one file per key on disk, or an
//! in-process map for tests and ephemeral runs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::SessionError;

/// Minimal string key/value store with local-storage semantics.
pub trait SessionStorage: Send + Sync {
    /// Read a key. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a key. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` when the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Stores each key as a file inside `dir` (0700 dir, 0600 files on unix).
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn ensure_dir(&self) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SessionError::Storage(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content).filter(|s| !s.trim().is_empty())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(format!("read {}: {e}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.ensure_dir()?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| SessionError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Storage(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}

/// Process-local storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries
            .lock()
            .map_err(|_| SessionError::Storage("memory storage lock poisoned".into()))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
