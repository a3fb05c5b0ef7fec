use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `prefs auth login`")]
    NotAuthenticated,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("credential store error: {0}")]
    Storage(String),

    #[error("invalid session data: {0}")]
    InvalidSession(String),

    #[error("{0}")]
    Other(String),
}
