use std::sync::Arc;

use pref_auth::SessionStore;
use pref_config::PrefsConfig;
use pref_core::Session;
use pref_core::dto::{RegisterRequest, RegisterResponse};

use crate::auth;
use crate::dashboard::Dashboard;
use crate::error::ApiError;
use crate::forms::PreferenceForm;
use crate::http::ApiClient;
use crate::monitor::Monitor;
use crate::resources::{Courses, Grades, Packs, Preferences, ResourceController, Students};
use crate::screen::{NoticeKind, Screen, Section};
use crate::services::QuickGrade;

/// Application state: one owner for the session, the screen, and every
/// controller. Nothing here is global.
pub struct App {
    config: PrefsConfig,
    client: ApiClient,
    screen: Arc<Screen>,
    pub students: ResourceController<Students>,
    pub courses: ResourceController<Courses>,
    pub packs: ResourceController<Packs>,
    pub preferences: ResourceController<Preferences>,
    pub grades: ResourceController<Grades>,
    pub preference_form: PreferenceForm,
    pub dashboard: Dashboard,
    pub services: QuickGrade,
    pub monitor: Monitor,
}

impl App {
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the HTTP client cannot be built.
    pub fn new(config: PrefsConfig, session: SessionStore) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api, session)?;
        let screen = Arc::new(Screen::new(config.ui.notice_ttl()));

        Ok(Self {
            students: ResourceController::new(client.clone(), Arc::clone(&screen)),
            courses: ResourceController::new(client.clone(), Arc::clone(&screen)),
            packs: ResourceController::new(client.clone(), Arc::clone(&screen)),
            preferences: ResourceController::new(client.clone(), Arc::clone(&screen)),
            grades: ResourceController::new(client.clone(), Arc::clone(&screen)),
            preference_form: PreferenceForm::new(client.clone()),
            dashboard: Dashboard::new(client.clone(), Arc::clone(&screen)),
            services: QuickGrade::new(client.clone(), Arc::clone(&screen)),
            monitor: Monitor::new(client.clone(), Arc::clone(&screen)),
            config,
            client,
            screen,
        })
    }

    /// Open the configured credential backend, then [`Self::new`].
    ///
    /// # Errors
    ///
    /// `Auth` when the backend cannot be opened, `Client` as in [`Self::new`].
    pub fn from_config(config: PrefsConfig) -> Result<Self, ApiError> {
        let session = pref_auth::session_store(&config.session)?;
        Self::new(config, session)
    }

    #[must_use]
    pub const fn config(&self) -> &PrefsConfig {
        &self.config
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        self.client.session()
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Restore the persisted session and show the dashboard, or force the
    /// login section when there is none.
    pub async fn start(&self) -> Section {
        if self.session().restore().is_some() {
            self.show_section(Section::Dashboard).await;
            Section::Dashboard
        } else {
            self.screen.activate(Section::Login);
            Section::Login
        }
    }

    /// Log in from the login section and move to the dashboard.
    ///
    /// # Errors
    ///
    /// See [`auth::login`]. The failure is also shown as a notice.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let ticket = self.screen.activate(Section::Login);
        match auth::login(&self.client, username, password).await {
            Ok(session) => {
                self.screen.notify(ticket, NoticeKind::Success, "Login successful!");
                self.show_section(Section::Dashboard).await;
                Ok(session)
            }
            Err(error) => {
                tracing::warn!(%error, username, "login failed");
                self.screen.notify(ticket, NoticeKind::Error, error.notice_text("Login failed"));
                Err(error)
            }
        }
    }

    /// Register from the register section; on success the login section is
    /// shown with a prompt to log in.
    ///
    /// # Errors
    ///
    /// See [`auth::register`]. The failure is also shown as a notice.
    pub async fn register(
        &self,
        registration: &RegisterRequest,
    ) -> Result<RegisterResponse, ApiError> {
        let ticket = self.screen.activate(Section::Register);
        match auth::register(&self.client, registration).await {
            Ok(response) => {
                let login = self.screen.activate(Section::Login);
                self.screen.notify(
                    login,
                    NoticeKind::Success,
                    "Registration successful! Please login.",
                );
                Ok(response)
            }
            Err(error) => {
                tracing::warn!(%error, username = %registration.username, "registration failed");
                self.screen.notify(
                    ticket,
                    NoticeKind::Error,
                    error.notice_text("Registration failed"),
                );
                Err(error)
            }
        }
    }

    /// Clear the session everywhere and show the login section.
    pub fn logout(&self) {
        self.session().logout();
        self.screen.clear();
        self.screen.activate(Section::Login);
    }
}
