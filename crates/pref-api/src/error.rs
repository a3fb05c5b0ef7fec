use pref_auth::AuthError;
use pref_core::CoreError;
use pref_core::sanitize::display_text;
use thiserror::Error;

/// Errors from talking to the REST backend.
///
/// A request that never got an answer (`Transport`) is shown as
/// `Error: <message>`; a non-2xx answer (`Status`) uses the server's message
/// or a per-action fallback.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached the client (connect, timeout, body read).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}{}", describe(.message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// A 2xx body that does not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

fn describe(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        Self::Validation(error.to_string())
    }
}

impl ApiError {
    /// Notice text preferring the server-provided message.
    #[must_use]
    pub fn notice_text(&self, fallback: &str) -> String {
        match self {
            Self::Transport(message) | Self::Decode(message) | Self::Client(message) => {
                format!("Error: {message}")
            }
            Self::Status {
                message: Some(message),
                ..
            } => display_text(message).into_owned(),
            Self::Status { message: None, .. } => fallback.to_string(),
            Self::Auth(error) => format!("Error: {error}"),
            Self::Validation(message) => message.clone(),
        }
    }

    /// Notice text that always uses `fallback` for non-2xx answers.
    #[must_use]
    pub fn notice_generic(&self, fallback: &str) -> String {
        match self {
            Self::Status { .. } => fallback.to_string(),
            other => other.notice_text(fallback),
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
