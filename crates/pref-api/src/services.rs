//! QuickGrade service panel: health and statistics, both proxied by the
//! backend under `/microservices/quickgrade`.

use std::sync::Arc;

use pref_core::dto::{GradeStatistics, ServiceHealth};
use pref_core::sanitize::{display_opt, display_text};

use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest};
use crate::screen::{Field, NoticeKind, Screen, Section, Slot, View};

const HEALTH_PATH: &str = "/microservices/quickgrade/health";
const STATISTICS_PATH: &str = "/microservices/quickgrade/statistics";

#[must_use]
pub fn health_fields(health: &ServiceHealth) -> Vec<Field> {
    vec![
        Field::new("Service", display_text(&health.service)),
        Field::new("Status", display_text(&health.status)),
        Field::new("Available", if health.available { "Yes" } else { "No" }),
    ]
}

#[must_use]
pub fn statistics_fields(stats: &GradeStatistics) -> Vec<Field> {
    let mut fields = vec![
        Field::new("Total Grades", stats.total_grades.to_string()),
        Field::new("Average Grade", stats.average_display()),
        Field::new("Pass Rate", stats.pass_rate_display()),
    ];
    if let Some(min) = stats.min_grade {
        fields.push(Field::new("Min Grade", min.to_string()));
    }
    if let Some(max) = stats.max_grade {
        fields.push(Field::new("Max Grade", max.to_string()));
    }
    if stats.last_published_student.is_some() || stats.last_published_course.is_some() {
        fields.push(Field::new(
            "Last Published",
            format!(
                "{} / {}",
                display_opt(stats.last_published_student.as_deref()),
                display_opt(stats.last_published_course.as_deref())
            ),
        ));
    }
    fields
}

pub struct QuickGrade {
    client: ApiClient,
    screen: Arc<Screen>,
}

impl QuickGrade {
    #[must_use]
    pub const fn new(client: ApiClient, screen: Arc<Screen>) -> Self {
        Self { client, screen }
    }

    /// # Errors
    ///
    /// `Transport`, `Status`, or `Decode`, after it was shown as a notice.
    pub async fn health(&self) -> Result<ServiceHealth, ApiError> {
        let ticket = self.screen.ticket(Section::Microservices);
        let result: Result<ServiceHealth, ApiError> = self
            .client
            .get_json(ApiRequest::get(HEALTH_PATH).authenticated(true))
            .await;
        match &result {
            Ok(health) => {
                self.screen.render(ticket, Slot::Health, View::Panel(health_fields(health)));
            }
            Err(error) => {
                tracing::warn!(%error, "quickgrade health check failed");
                self.screen.notify(
                    ticket,
                    NoticeKind::Error,
                    error.notice_generic("Failed to check service health"),
                );
            }
        }
        result
    }

    /// # Errors
    ///
    /// `Transport`, `Status`, or `Decode`, after it was shown as a notice.
    pub async fn statistics(&self) -> Result<GradeStatistics, ApiError> {
        let ticket = self.screen.ticket(Section::Microservices);
        let result: Result<GradeStatistics, ApiError> = self
            .client
            .get_json(ApiRequest::get(STATISTICS_PATH).authenticated(true))
            .await;
        match &result {
            Ok(stats) => {
                self.screen.render(
                    ticket,
                    Slot::Statistics,
                    View::Panel(statistics_fields(stats)),
                );
            }
            Err(error) => {
                tracing::warn!(%error, "quickgrade statistics failed");
                self.screen.notify(
                    ticket,
                    NoticeKind::Error,
                    error.notice_text("Service unavailable"),
                );
            }
        }
        result
    }
}
