//! Persisted session credential and cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway reads the token before every request and clears both entries
//! when the backend answers 401. Pages write them after a successful login.
//! Storage is injected so tests can run against [`MemoryStore`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::types::User;

/// Local-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "jwt";
/// Local-storage key holding the serialized [`User`].
pub const USER_INFO_KEY: &str = "user_info";

/// String key/value persistence backing a [`Session`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`. Storage failures (private mode, quota) are logged
/// and otherwise behave like a missing entry.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "csr")]
impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; dropping write to {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected write to {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Handle over the token and user-info entries.
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("logged_in", &self.is_logged_in()).finish()
    }
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session over the browser's `localStorage`.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Current bearer token. An empty stored value counts as no token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Cached profile of the logged-in user, if present and well-formed.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("discarding unreadable {USER_INFO_KEY}: {e}");
                None
            }
        }
    }

    /// Replace the current credential and profile cache.
    pub fn set(&self, token: &str, user: Option<&User>) {
        self.store.set(TOKEN_KEY, token);
        match user.map(serde_json::to_string) {
            Some(Ok(json)) => self.store.set(USER_INFO_KEY, &json),
            Some(Err(e)) => {
                log::warn!("failed to serialize user info: {e}");
                self.store.remove(USER_INFO_KEY);
            }
            None => self.store.remove(USER_INFO_KEY),
        }
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_INFO_KEY);
    }
}
