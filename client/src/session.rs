//! Session context.
//!
//! The bearer token and the signed-in user live in a persistent key/value
//! store (browser `localStorage`, a JSON file for the CLI, memory in
//! tests). [`SessionContext`] is handed to the gateways and the page shell
//! at construction instead of each call site reaching for the store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::api::AuthResponse;
use crate::error::{ApiResult, AuthError, AuthResult, SessionError, SessionResult};
use crate::models::User;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key of the JSON-encoded user.
pub const USER_KEY: &str = "user";

/// Session file used by the CLI when nothing else is configured.
pub const DEFAULT_SESSION_FILE: &str = ".middleframe/session.json";

/// Environment variable overriding the session file location.
pub const SESSION_FILE_ENV: &str = "MIDDLEFRAME_SESSION_FILE";

// =============================================================================
// Stores
// =============================================================================

/// Minimal persistent string store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// In-memory store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SessionError::Unavailable("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SessionError::Unavailable("memory store poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// JSON-object file store. The file is re-read on every access.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`; the file is created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at `MIDDLEFRAME_SESSION_FILE`, or [`DEFAULT_SESSION_FILE`].
    pub fn from_env() -> Self {
        match std::env::var(SESSION_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::new(path.trim()),
            _ => Self::new(DEFAULT_SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SessionResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                log::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

// =============================================================================
// Session context
// =============================================================================

/// Snapshot of the persisted session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Explicit handle on the persisted token and user.
#[derive(Debug, Clone)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read token and user (page load).
    pub fn load(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }

    /// Current bearer token, read fresh from the store.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// Signed-in user, if one is stored and decodes.
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Stored user record is invalid: {}", e);
                None
            }
        }
    }

    /// Persist a successful login.
    pub fn store_login(&self, token: &str, user: &User) -> SessionResult<()> {
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, &serde_json::to_string(user)?)?;
        log::info!("Signed in as {} ({})", user.username, user.role);
        Ok(())
    }

    /// Forget token and user (logout).
    pub fn clear(&self) -> SessionResult<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        log::info!("Session cleared");
        Ok(())
    }
}

/// Apply the outcome of `auth/login` or `auth/register` to the session.
///
/// Token and user are written only when the server reports success and
/// provides both; otherwise nothing is written.
pub fn complete_login<S: KeyValueStore>(
    session: &SessionContext<S>,
    response: ApiResult<AuthResponse>,
) -> AuthResult<User> {
    let response = response?;

    match (response.success, response.token, response.user) {
        (true, Some(token), Some(user)) if !token.is_empty() => {
            session.store_login(&token, &user)?;
            Ok(user)
        }
        _ => Err(AuthError::Rejected(response.error.unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, INVALID_CREDENTIALS};
    use crate::models::Role;
    use tempfile::tempdir;

    fn ines() -> User {
        User {
            id: 2,
            username: "ines".into(),
            email: "ines@example.com".into(),
            role: Role::Uploader,
        }
    }

    #[test]
    fn test_login_lifecycle() {
        let session = SessionContext::new(MemoryStore::new());
        assert_eq!(session.load(), Session::default());

        session.store_login("tok-1", &ines()).unwrap();
        let loaded = session.load();
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.user.unwrap().username, "ines");

        session.clear().unwrap();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_token_read_fresh_from_store() {
        let store = MemoryStore::new();
        let session = SessionContext::new(store.clone());

        store.set(TOKEN_KEY, "first").unwrap();
        assert_eq!(session.token().as_deref(), Some("first"));
        store.set(TOKEN_KEY, "second").unwrap();
        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_failed_login_writes_nothing() {
        let session = SessionContext::new(MemoryStore::new());
        let response = AuthResponse {
            success: false,
            token: None,
            user: None,
            error: Some("Invalid credentials".into()),
        };

        let err = complete_login(&session, Ok(response)).unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(session.token().is_none());
        assert!(session.store().get(USER_KEY).is_none());
    }

    #[test]
    fn test_server_rejection_writes_nothing() {
        let session = SessionContext::new(MemoryStore::new());
        let err = complete_login(&session, Err(ApiError::Server(String::new()))).unwrap_err();
        assert_eq!(err.user_message(), INVALID_CREDENTIALS);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_successful_login_persists() {
        let session = SessionContext::new(MemoryStore::new());
        let response = AuthResponse {
            success: true,
            token: Some("jwt".into()),
            user: Some(ines()),
            error: None,
        };

        let user = complete_login(&session, Ok(response)).unwrap();
        assert_eq!(user, ines());
        assert_eq!(session.token().as_deref(), Some("jwt"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/session.json"));
        let session = SessionContext::new(store.clone());

        session.store_login("jwt", &ines()).unwrap();

        // A second handle on the same file sees the write.
        let reopened = SessionContext::new(FileStore::new(store.path()));
        assert_eq!(reopened.user(), Some(ines()));

        reopened.clear().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_corrupt_user_is_ignored() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json").unwrap();
        let session = SessionContext::new(store);
        assert!(session.user().is_none());
    }
}
