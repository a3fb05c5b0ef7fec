use std::collections::BTreeMap;

use crate::credentials::{CredentialStore, merged};
use crate::error::AuthError;

const KEYRING_USER: &str = "session";

/// OS keychain backend. The whole key map lives in one entry so a write
/// replaces the triple in a single call.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, AuthError> {
        match self.entry()?.get_password() {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| AuthError::InvalidSession(format!("keyring entry: {e}"))),
            Err(keyring::Error::NoEntry) => Ok(BTreeMap::new()),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), AuthError> {
        let json = serde_json::to_string(map)
            .map_err(|e| AuthError::Storage(format!("serialize session: {e}")))?;
        self.entry()?
            .set_password(&json)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl CredentialStore for KeyringStore {
    fn name(&self) -> &'static str {
        "keyring"
    }

    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.read_map()?.remove(key).filter(|v| !v.trim().is_empty()))
    }

    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), AuthError> {
        let current = self.read_map().unwrap_or_else(|error| {
            tracing::warn!(%error, "discarding unreadable keyring entry");
            BTreeMap::new()
        });
        self.write_map(&merged(current, entries))
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), AuthError> {
        let mut map = self.read_map().unwrap_or_default();
        for key in keys {
            map.remove(*key);
        }
        if !map.is_empty() {
            return self.write_map(&map);
        }
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }
}
