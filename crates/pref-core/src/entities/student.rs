use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A student record as served by `GET /students`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub year: i32,
}

/// Body of `POST /students`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub code: String,
    pub name: String,
    pub email: String,
    pub year: i32,
}

impl NewStudent {
    /// Reject drafts the backend would bounce anyway.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [("code", &self.code), ("name", &self.name), ("email", &self.email)] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("student {field} is required")));
            }
        }
        if !self.email.contains('@') {
            return Err(CoreError::Validation(format!(
                "student email '{}' is not an address",
                self.email
            )));
        }
        if self.year < 1 {
            return Err(CoreError::Validation(format!(
                "student year must be positive, got {}",
                self.year
            )));
        }
        Ok(())
    }
}
