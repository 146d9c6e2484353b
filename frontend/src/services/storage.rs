//! `localStorage` session backing.

use middleframe::{KeyValueStore, SessionContext, SessionError, SessionResult};
use web_sys::Storage;

/// `window.localStorage` as a [`KeyValueStore`].
///
/// Every call looks the storage up again; nothing is cached in Rust.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> SessionResult<Storage> {
        web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }
}

/// Session context shared by the page shell, the gateway and the auth pages.
pub type BrowserSession = SessionContext<LocalStorage>;

pub fn browser_session() -> BrowserSession {
    SessionContext::new(LocalStorage)
}
