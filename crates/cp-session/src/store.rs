use std::path::PathBuf;

use cp_core::entities::User;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::storage::{FileStorage, MemoryStorage, SessionStorage};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Env var consulted when no token is stored.
pub const TOKEN_ENV_VAR: &str = "COPARENT_AUTH__TOKEN";

/// The authenticated identity plus its credential token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Where the active token was read from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Stored,
    Env,
}

/// Session cache backed by a [`SessionStorage`].
///
/// Reads go to storage every time, so a login in one store is seen by every
/// other store over the same backend.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Store rooted at `dir`, or an error when no directory could be resolved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoHomeDir` when `dir` is `None`.
    pub fn file(dir: Option<PathBuf>) -> Result<Self, SessionError> {
        dir.map(|d| Self::new(FileStorage::new(d)))
            .ok_or(SessionError::NoHomeDir)
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Token for outbound requests: stored token first, then `COPARENT_AUTH__TOKEN`.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token_with_source().map(|(token, _)| token)
    }

    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        self.token_with_source().map(|(_, source)| source)
    }

    fn token_with_source(&self) -> Option<(String, TokenSource)> {
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) => return Some((token.trim().to_string(), TokenSource::Stored)),
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "failed to read stored token"),
        }
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .map(|t| (t.trim().to_string(), TokenSource::Env))
    }

    /// The cached user. Unreadable or corrupt data reads as `None`.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                tracing::warn!(%error, "failed to read stored user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "stored user is not valid JSON; ignoring it");
                None
            }
        }
    }

    /// Both halves of the session, when both are present.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        let user = self.user()?;
        let token = self.token()?;
        Some(Session { token, user })
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }

    /// Persist a freshly issued session, replacing any previous one.
    ///
    /// The token is written first. A failed token write leaves the previous
    /// session whole; a failed user write clears both keys, so a new token is
    /// never paired with the previous user.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the user cannot be encoded or storage fails.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        if let Err(error) = self.storage.set(USER_KEY, &user) {
            if let Err(cleanup) = self.clear() {
                tracing::warn!(%cleanup, "failed to clear half-written session");
            }
            return Err(error);
        }
        tracing::debug!(user_id = %session.user.id, "session saved");
        Ok(())
    }

    /// Drop both the user and the token.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if a key cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)?;
        tracing::debug!("session cleared");
        Ok(())
    }
}
