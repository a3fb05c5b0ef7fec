//! Cross-cutting error types.
//!
//! Transport and storage errors live in `pref-api` and `pref-auth`; this
//! enum covers parsing and validation of values shared by every crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A role string did not match ADMIN, INSTRUCTOR, or STUDENT.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A section id did not name a screen section.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// Data failed validation (format, range).
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
