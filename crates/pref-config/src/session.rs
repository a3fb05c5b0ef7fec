//! Credential persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    String::from("prefs-cli")
}

/// Where the session triple is persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackend {
    /// OS keychain entry.
    Keyring,
    /// JSON file with 0600 permissions.
    #[default]
    File,
    /// Process memory only; nothing survives exit.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,

    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Overrides `~/.prefs/session.json`.
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            keyring_service: default_keyring_service(),
            file_path: None,
        }
    }
}

impl SessionConfig {
    /// Resolved session file location, `None` when no home directory exists.
    #[must_use]
    pub fn resolved_file_path(&self) -> Option<PathBuf> {
        self.file_path
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".prefs").join("session.json")))
    }
}
