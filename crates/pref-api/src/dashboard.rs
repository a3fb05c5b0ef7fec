//! Dashboard aggregator.
//!
//! Six independent reads issued concurrently. Each failure is logged and
//! leaves its slot empty; none of them fails the refresh.

use std::borrow::Cow;
use std::sync::Arc;

use pref_core::Role;
use pref_core::dto::ServiceHealth;
use pref_core::sanitize::display_text;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest};
use crate::screen::{Field, Screen, Section, Slot, View};

const MISSING: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub username: Option<String>,
    pub role: Option<Role>,
    pub students: Option<u64>,
    pub preferences: Option<u64>,
    pub courses: Option<usize>,
    pub packs: Option<usize>,
    pub grades: Option<usize>,
    pub service_status: Option<String>,
}

impl DashboardSummary {
    #[must_use]
    pub fn welcome(&self) -> String {
        let username = self.username.as_deref().map_or(Cow::Borrowed("guest"), display_text);
        format!("Welcome, {username}!")
    }

    /// Panel fields, `-` for every query that failed.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        fn shown<T: ToString>(value: Option<&T>) -> String {
            value.map_or_else(|| MISSING.to_string(), ToString::to_string)
        }

        vec![
            Field::new("User", self.welcome()),
            Field::new("Role", shown(self.role.as_ref())),
            Field::new("Students", shown(self.students.as_ref())),
            Field::new("Courses", shown(self.courses.as_ref())),
            Field::new("Packs", shown(self.packs.as_ref())),
            Field::new("Preferences", shown(self.preferences.as_ref())),
            Field::new("Grades", shown(self.grades.as_ref())),
            Field::new(
                "QuickGrade",
                self.service_status.as_deref().map_or_else(
                    || MISSING.to_string(),
                    |status| display_text(status).into_owned(),
                ),
            ),
        ]
    }
}

pub struct Dashboard {
    client: ApiClient,
    screen: Arc<Screen>,
}

impl Dashboard {
    #[must_use]
    pub const fn new(client: ApiClient, screen: Arc<Screen>) -> Self {
        Self { client, screen }
    }

    /// Query every source and render whatever came back.
    pub async fn refresh(&self) -> DashboardSummary {
        let ticket = self.screen.ticket(Section::Dashboard);

        let (students, preferences, courses, packs, grades, health) = tokio::join!(
            self.count("/students/count"),
            self.count("/preferences/count"),
            self.length("/courses", false),
            self.length("/packs", false),
            self.length("/grades", true),
            self.service_status(),
        );

        let session = self.client.session();
        let summary = DashboardSummary {
            username: session.username(),
            role: session.role(),
            students: best_effort("students count", students),
            preferences: best_effort("preferences count", preferences),
            courses: best_effort("courses", courses),
            packs: best_effort("packs", packs),
            grades: best_effort("grades", grades),
            service_status: best_effort("quickgrade health", health),
        };

        self.screen.render(ticket, Slot::Summary, View::Panel(summary.fields()));
        summary
    }

    /// Plain-text integer count endpoint.
    async fn count(&self, path: &str) -> Result<u64, ApiError> {
        let text = self
            .client
            .get_text(ApiRequest::get(path).authenticated(true))
            .await?;
        text.parse()
            .map_err(|e| ApiError::Decode(format!("count '{text}': {e}")))
    }

    async fn length(&self, path: &str, authenticated: bool) -> Result<usize, ApiError> {
        let items: Vec<serde_json::Value> = self
            .client
            .get_json(ApiRequest::get(path).authenticated(authenticated))
            .await?;
        Ok(items.len())
    }

    async fn service_status(&self) -> Result<String, ApiError> {
        let health: ServiceHealth = self
            .client
            .get_json(ApiRequest::get("/microservices/quickgrade/health").authenticated(true))
            .await?;
        if health.status.trim().is_empty() {
            Ok(String::from("Unknown"))
        } else {
            Ok(health.status)
        }
    }
}

fn best_effort<T>(query: &str, result: Result<T, ApiError>) -> Option<T> {
    result.map(Some).unwrap_or_else(|error| {
        tracing::warn!(query, %error, "dashboard query failed");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_values_render_as_dash() {
        let summary = DashboardSummary {
            username: Some("alice".into()),
            role: Some(Role::Admin),
            students: Some(12),
            ..Default::default()
        };
        let fields = summary.fields();
        assert_eq!(fields[0].value, "Welcome, alice!");
        assert_eq!(fields[1].value, "ADMIN");
        assert_eq!(fields[2].value, "12");
        assert_eq!(fields[3].value, "-");
        assert_eq!(fields[7].value, "-");
    }

    #[test]
    fn server_text_is_escaped_in_panel() {
        let summary = DashboardSummary {
            username: Some("ev\u{1b}[31mil".into()),
            service_status: Some("UP\u{1b}[2J".into()),
            ..Default::default()
        };
        let fields = summary.fields();
        assert!(fields.iter().all(|field| !field.value.contains('\u{1b}')));
        assert_eq!(fields[0].value, "Welcome, ev\\u{1b}[31mil!");
        assert_eq!(fields[7].value, "UP\\u{1b}[2J");
    }

    #[test]
    fn best_effort_swallows_errors() {
        let failed: Result<u64, ApiError> = Err(ApiError::Transport("refused".into()));
        assert_eq!(best_effort("students count", failed), None);
        assert_eq!(best_effort("packs", Ok::<usize, ApiError>(3)), Some(3));
    }
}
