//! Wire DTOs for auth, error bodies, and the QuickGrade panel.

use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of a successful `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    /// Raw role string; parsed into [`Role`] by the session layer.
    pub role: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Response of a successful `POST /auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response of `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeResponse {
    pub username: String,
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub authorities: serde_json::Value,
}

/// Structured error body. Spring emits `message`; hand-built maps use `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// First non-blank of `message`, then `error`.
    #[must_use]
    pub fn best_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}

/// Response of `GET /microservices/quickgrade/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceHealth {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub available: bool,
}

/// Response of `GET /microservices/quickgrade/statistics`.
///
/// QuickGrade reports `totalGradesPublished`; older payloads use
/// `totalGrades` and add a `passRate` in `[0, 1]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeStatistics {
    #[serde(default, alias = "totalGradesPublished")]
    pub total_grades: u64,
    #[serde(default)]
    pub average_grade: Option<f64>,
    #[serde(default)]
    pub pass_rate: Option<f64>,
    #[serde(default)]
    pub min_grade: Option<f64>,
    #[serde(default)]
    pub max_grade: Option<f64>,
    #[serde(default)]
    pub last_published_student: Option<String>,
    #[serde(default)]
    pub last_published_course: Option<String>,
}

impl GradeStatistics {
    #[must_use]
    pub fn average_display(&self) -> String {
        match self.average_grade {
            Some(avg) if avg != 0.0 => format!("{avg:.2}"),
            _ => String::from("N/A"),
        }
    }

    #[must_use]
    pub fn pass_rate_display(&self) -> String {
        match self.pass_rate {
            Some(rate) if rate != 0.0 => format!("{:.1}%", rate * 100.0),
            _ => String::from("N/A"),
        }
    }
}
