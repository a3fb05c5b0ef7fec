//! View router: section switching and the navigation menu.

use serde::Serialize;

use crate::app::App;
use crate::error::ApiError;
use crate::screen::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "section", rename_all = "lowercase")]
pub enum NavTarget {
    Section(Section),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: NavTarget,
}

const MENU: [Section; 8] = [
    Section::Dashboard,
    Section::Students,
    Section::Courses,
    Section::Packs,
    Section::Preferences,
    Section::Grades,
    Section::Microservices,
    Section::Actuator,
];

impl App {
    /// Show the section named `id`. Unknown ids change nothing and return
    /// `false`.
    pub async fn show(&self, id: &str) -> bool {
        match id.parse::<Section>() {
            Ok(section) => {
                self.show_section(section).await;
                true
            }
            Err(error) => {
                tracing::debug!(%error, "navigation ignored");
                false
            }
        }
    }

    /// Activate `section` and, when a session exists, load its data.
    pub async fn show_section(&self, section: Section) {
        self.screen().activate(section);
        if !self.session().is_authenticated() {
            return;
        }

        match section {
            Section::Dashboard => {
                self.dashboard.refresh().await;
            }
            Section::Students => settle(section, self.students.load().await),
            Section::Courses => settle(section, self.courses.load().await),
            Section::Packs => settle(section, self.packs.load().await),
            Section::Preferences => {
                let (list, ()) = tokio::join!(self.preferences.load(), self.preference_form.load());
                settle(section, list);
            }
            Section::Grades => settle(section, self.grades.load().await),
            Section::Microservices => settle(section, self.services.health().await),
            Section::Actuator => {
                let (health, info) = tokio::join!(self.monitor.health(), self.monitor.info());
                settle(section, health);
                settle(section, info);
            }
            Section::Login | Section::Register => {}
        }
    }
}

/// Log a failed section load. The controller has already posted the notice.
fn settle<T>(section: Section, result: Result<T, ApiError>) {
    if let Err(error) = result {
        tracing::debug!(%section, %error, "section load failed");
    }
}

impl App {
    /// Menu entries for the current session state.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavEntry> {
        if !self.session().is_authenticated() {
            return vec![NavEntry {
                label: Section::Login.title(),
                target: NavTarget::Section(Section::Login),
            }];
        }

        MENU.into_iter()
            .map(|section| NavEntry {
                label: section.title(),
                target: NavTarget::Section(section),
            })
            .chain(std::iter::once(NavEntry {
                label: "Logout",
                target: NavTarget::Logout,
            }))
            .collect()
    }
}
