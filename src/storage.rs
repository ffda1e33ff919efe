//! Identity Store
//!
//! The logged-in user is persisted as one JSON record under a single key.

use crate::error::{ClientError, ClientResult};
use crate::models::User;

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove(&self, key: &str) -> ClientResult<()>;
}

/// `window.localStorage`. Private browsing can deny it; every call then
/// fails with `ClientError::Storage` and the app runs without a saved session.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[SESSION] localStorage unavailable, login will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> ClientResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Typed access to the persisted user record
pub struct IdentityStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> IdentityStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The saved user, if any. A record that no longer parses is removed.
    pub fn load(&self) -> Option<User> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::error!("[SESSION] error reading saved user: {}", err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::error!("[SESSION] error parsing saved user data: {}", err);
                if let Err(err) = self.store.remove(&self.key) {
                    log::error!("[SESSION] error removing saved user: {}", err);
                }
                None
            }
        }
    }

    pub fn save(&self, user: &User) -> ClientResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(&self.key, &raw)
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::user;

    fn identity() -> IdentityStore<MemoryStore> {
        IdentityStore::new(MemoryStore::default(), "currentUser")
    }

    #[test]
    fn test_save_then_load() {
        let identity = identity();
        assert!(identity.load().is_none());

        identity.save(&user(7, "A", "B")).unwrap();
        assert_eq!(identity.load(), Some(user(7, "A", "B")));
    }

    #[test]
    fn test_corrupt_record_is_removed() {
        let identity = identity();
        identity.store.set("currentUser", "{not json").unwrap();

        assert!(identity.load().is_none());
        assert_eq!(identity.store.get("currentUser").unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let identity = identity();
        identity.save(&user(7, "A", "B")).unwrap();
        identity.clear().unwrap();
        assert!(identity.load().is_none());
    }
}
