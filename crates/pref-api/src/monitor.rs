//! Actuator endpoints, served from the server origin outside `/api`.

use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest};
use crate::screen::{NoticeKind, Screen, Section, Slot, View};

pub const NO_INFO: &str = "No info available";

pub struct Monitor {
    client: ApiClient,
    screen: Arc<Screen>,
}

impl Monitor {
    #[must_use]
    pub const fn new(client: ApiClient, screen: Arc<Screen>) -> Self {
        Self { client, screen }
    }

    /// `GET /actuator/health`, rendered as raw JSON.
    ///
    /// # Errors
    ///
    /// `Transport`, `Status`, or `Decode`, after it was shown as a notice.
    pub async fn health(&self) -> Result<serde_json::Value, ApiError> {
        let ticket = self.screen.ticket(Section::Actuator);
        let result: Result<serde_json::Value, ApiError> = self
            .client
            .get_json(ApiRequest::get("/actuator/health").at_origin())
            .await;
        match &result {
            Ok(health) => {
                self.screen.render(ticket, Slot::Health, View::Json(health.clone()));
            }
            Err(error) => {
                tracing::warn!(%error, "actuator health failed");
                self.screen.notify(
                    ticket,
                    NoticeKind::Error,
                    error.notice_generic("Failed to load health info"),
                );
            }
        }
        result
    }

    /// `GET /actuator/info`. A non-2xx answer renders [`NO_INFO`] and yields
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// `Transport` or `Decode`, after it was shown as a notice.
    pub async fn info(&self) -> Result<Option<serde_json::Value>, ApiError> {
        let ticket = self.screen.ticket(Section::Actuator);
        let request = ApiRequest::get("/actuator/info").at_origin();
        let outcome = match self.client.request(request).await {
            Ok(resp) if resp.is_success() => resp.json::<serde_json::Value>().map(Some),
            Ok(resp) => {
                tracing::debug!(status = resp.status(), "actuator info unavailable");
                Ok(None)
            }
            Err(error) => Err(error),
        };

        match &outcome {
            Ok(Some(info)) => {
                self.screen.render(ticket, Slot::Info, View::Json(info.clone()));
            }
            Ok(None) => {
                self.screen.render(ticket, Slot::Info, View::Text(NO_INFO.to_string()));
            }
            Err(error) => {
                tracing::warn!(%error, "actuator info failed");
                self.screen.notify(ticket, NoticeKind::Error, error.notice_text(NO_INFO));
            }
        }
        outcome
    }
}
