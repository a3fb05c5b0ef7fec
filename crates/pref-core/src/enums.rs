//! Role and course-type enums.
//!
//! Both serialize in the backend's `SCREAMING_SNAKE_CASE` form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role returned by `/auth/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Instructor, Self::Student];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Instructor => "INSTRUCTOR",
            Self::Student => "STUDENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Case-insensitive; tolerates the Spring `ROLE_` prefix.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let bare = trimmed
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("ROLE_"))
            .map_or(trimmed, |_| &trimmed[5..]);

        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(bare))
            .ok_or_else(|| CoreError::UnknownRole(value.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CourseType
// ---------------------------------------------------------------------------

/// Course classification. The backend stores `OPTIONAL` for elective courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Compulsory,
    #[serde(alias = "OPTIONAL")]
    Elective,
    #[serde(other)]
    Unknown,
}

impl CourseType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compulsory => "COMPULSORY",
            Self::Elective => "ELECTIVE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "COMPULSORY" => Ok(Self::Compulsory),
            "ELECTIVE" | "OPTIONAL" => Ok(Self::Elective),
            _ => Err(CoreError::Validation(format!(
                "unknown course type '{value}' (expected COMPULSORY or ELECTIVE)"
            ))),
        }
    }
}
