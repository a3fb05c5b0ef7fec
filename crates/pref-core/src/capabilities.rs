//! Role-based capability checks for UI actions.
//!
//! These decide which controls are offered. They are hints only: the backend
//! enforces authorization on every request regardless of what is shown.

use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A gated action offered by a resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    CreateStudent,
    DeleteStudent,
    CreatePreference,
    DeletePreference,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateStudent => "create_student",
            Self::DeleteStudent => "delete_student",
            Self::CreatePreference => "create_preference",
            Self::DeletePreference => "delete_preference",
        }
    }
}

/// Whether `role` may be offered `action`.
#[must_use]
pub const fn capabilities(role: Role, action: Action) -> bool {
    match action {
        Action::CreateStudent | Action::DeleteStudent => {
            matches!(role, Role::Admin | Role::Instructor)
        }
        Action::CreatePreference | Action::DeletePreference => {
            matches!(role, Role::Admin | Role::Student)
        }
    }
}

/// Same as [`capabilities`], with no session meaning no actions.
#[must_use]
pub fn allowed(role: Option<Role>, action: Action) -> bool {
    role.is_some_and(|role| capabilities(role, action))
}
