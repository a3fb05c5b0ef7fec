use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use pref_core::{Role, Session};

use crate::credentials::{CredentialStore, ROLE_KEY, SESSION_KEYS, TOKEN_KEY, USERNAME_KEY};
use crate::error::AuthError;
use crate::expiry::decode_expiry;

struct Inner {
    current: RwLock<Option<Session>>,
    storage: Box<dyn CredentialStore>,
}

/// In-memory session mirror backed by a persisted triple.
///
/// Clones share the same mirror, so the HTTP layer and the router always see
/// the same identity.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

/// Snapshot returned by [`SessionStore::status`].
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub username: Option<String>,
    pub role: Option<Role>,
    pub storage: &'static str,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
}

impl SessionStore {
    /// Start with an empty mirror. Call [`Self::restore`] to load persisted state.
    #[must_use]
    pub fn new(storage: Box<dyn CredentialStore>) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: RwLock::new(None),
                storage,
            }),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.read().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.read().as_ref().map(|s| s.role)
    }

    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.username.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    #[must_use]
    pub fn storage_name(&self) -> &'static str {
        self.inner.storage.name()
    }

    /// Rebuild the session from persisted storage without contacting the server.
    ///
    /// All three keys must be present and non-blank and the role must parse;
    /// anything less yields `None` and an empty mirror.
    pub fn restore(&self) -> Option<Session> {
        let session = match self.read_persisted() {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(
                    %error,
                    storage = self.storage_name(),
                    "failed to read persisted session"
                );
                None
            }
        };

        *self.write() = session.clone();
        match &session {
            Some(s) => tracing::info!(username = %s.username, role = %s.role, "session restored"),
            None => tracing::debug!("no persisted session"),
        }
        session
    }

    /// Persist the triple, then mirror it in memory.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the triple cannot be written; the
    /// mirror is left empty.
    pub fn establish(&self, session: Session) -> Result<(), AuthError> {
        let role = session.role.as_str();
        let written = self.inner.storage.put_all(&[
            (TOKEN_KEY, session.token.as_str()),
            (USERNAME_KEY, session.username.as_str()),
            (ROLE_KEY, role),
        ]);

        if let Err(error) = written {
            *self.write() = None;
            return Err(AuthError::Storage(format!("failed to persist session: {error}")));
        }

        tracing::info!(username = %session.username, role = %session.role, "session established");
        *self.write() = Some(session);
        Ok(())
    }

    /// Drop the session from memory and storage. Never fails.
    pub fn logout(&self) {
        let previous = self.write().take();
        if let Err(error) = self.inner.storage.remove_all(&SESSION_KEYS) {
            tracing::warn!(
                %error,
                storage = self.storage_name(),
                "failed to clear persisted session"
            );
        }
        if let Some(s) = previous {
            tracing::info!(username = %s.username, "logged out");
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let current = self.current();
        let expires_at = current
            .as_ref()
            .and_then(|s| decode_expiry(&s.token).ok());
        SessionStatus {
            authenticated: current.is_some(),
            username: current.as_ref().map(|s| s.username.clone()),
            role: current.as_ref().map(|s| s.role),
            storage: self.storage_name(),
            expires_at,
            expired: expires_at.is_some_and(|exp| exp <= Utc::now()),
        }
    }

    fn read_persisted(&self) -> Result<Option<Session>, AuthError> {
        let storage = &self.inner.storage;
        let token = storage.get(TOKEN_KEY)?.filter(|v| !v.trim().is_empty());
        let username = storage.get(USERNAME_KEY)?.filter(|v| !v.trim().is_empty());
        let role = storage.get(ROLE_KEY)?.filter(|v| !v.trim().is_empty());

        let (Some(token), Some(username), Some(role)) = (token, username, role) else {
            return Ok(None);
        };
        match role.parse::<Role>() {
            Ok(role) => Ok(Some(Session::new(token, username, role))),
            Err(error) => {
                tracing::warn!(%error, "persisted role is not recognised; ignoring session");
                Ok(None)
            }
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &*self.read())
            .field("storage", &self.storage_name())
            .finish()
    }
}
