//! # pref-auth
//!
//! Session Store for the preference client.
//!
//! The authenticated identity is a `(token, username, role)` triple. It is
//! mirrored in memory by [`SessionStore`] and persisted through a
//! [`CredentialStore`] backend chosen by configuration:
//!
//! - `keyring`: one OS keychain entry holding the whole triple
//! - `file`: `~/.prefs/session.json`, written atomically with mode 0600
//! - `memory`: nothing survives the process
//!
//! Tokens are never validated locally. A stale token is discovered by the
//! first API call that the server rejects.

pub mod credentials;
pub mod error;
pub mod expiry;
pub mod file_store;
pub mod keyring_store;
pub mod session_store;

pub use credentials::{CredentialStore, MemoryStore};
pub use error::AuthError;
pub use file_store::FileStore;
pub use keyring_store::KeyringStore;
pub use session_store::{SessionStatus, SessionStore};

use pref_config::{SessionBackend, SessionConfig};

/// Build the credential backend named by `config.backend`.
///
/// # Errors
///
/// Returns `AuthError::Storage` when the file backend is selected but no
/// session file location can be resolved.
pub fn open_store(config: &SessionConfig) -> Result<Box<dyn CredentialStore>, AuthError> {
    match config.backend {
        SessionBackend::Keyring => Ok(Box::new(KeyringStore::new(&config.keyring_service))),
        SessionBackend::File => {
            let path = config.resolved_file_path().ok_or_else(|| {
                AuthError::Storage("cannot determine home directory for session file".into())
            })?;
            Ok(Box::new(FileStore::new(path)))
        }
        SessionBackend::Memory => Ok(Box::new(MemoryStore::new())),
    }
}

/// Open the configured backend and wrap it in a [`SessionStore`].
///
/// # Errors
///
/// Same as [`open_store`].
pub fn session_store(config: &SessionConfig) -> Result<SessionStore, AuthError> {
    open_store(config).map(SessionStore::new)
}
