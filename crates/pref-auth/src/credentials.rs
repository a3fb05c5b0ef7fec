//! Key-value persistence for the session triple.
//!
//! Every backend stores the three keys together: `put_all` and `remove_all`
//! either apply to the whole set or fail without partial writes.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::error::AuthError;

pub const TOKEN_KEY: &str = "authToken";
pub const USERNAME_KEY: &str = "currentUser";
pub const ROLE_KEY: &str = "currentRole";

/// All keys of the persisted session, in write order.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USERNAME_KEY, ROLE_KEY];

/// Durable client-side key-value storage.
pub trait CredentialStore: Send + Sync {
    /// Short backend label for status output (`keyring`, `file`, `memory`).
    fn name(&self) -> &'static str;

    /// Read one key. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// Write every entry in a single step.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the backend cannot be written; no entry is kept then.
    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), AuthError>;

    /// Remove every listed key in a single step. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the backend cannot be written.
    fn remove_all(&self, keys: &[&str]) -> Result<(), AuthError>;
}

/// In-process store. Used for `session.backend = "memory"` and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    #[must_use]
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let map = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), AuthError> {
        let mut map = self.lock();
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), AuthError> {
        let mut map = self.lock();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

/// Merge `entries` into a map snapshot. Shared by the map-backed stores.
pub(crate) fn merged(
    mut map: BTreeMap<String, String>,
    entries: &[(&str, &str)],
) -> BTreeMap<String, String> {
    for (key, value) in entries {
        map.insert((*key).to_string(), (*value).to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_triple() {
        let store = MemoryStore::new();
        store
            .put_all(&[(TOKEN_KEY, "t"), (USERNAME_KEY, "alice"), (ROLE_KEY, "ADMIN")])
            .expect("put");
        assert_eq!(store.get(USERNAME_KEY).unwrap().as_deref(), Some("alice"));

        store.remove_all(&SESSION_KEYS).expect("remove");
        for key in SESSION_KEYS {
            assert!(store.get(key).unwrap().is_none());
        }
    }

    #[test]
    fn removing_missing_keys_is_fine() {
        let store = MemoryStore::new();
        assert!(store.remove_all(&SESSION_KEYS).is_ok());
    }
}
