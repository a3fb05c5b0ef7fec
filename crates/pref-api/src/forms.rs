//! Dropdown sources for the "add preference" form.
//!
//! Students and courses are loaded independently of the preferences cache.
//! A failed load is logged and leaves the previous options in place.

use std::sync::{Mutex, MutexGuard, PoisonError};

use pref_core::entities::{Course, Student};
use pref_core::sanitize::display_text;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest};

/// One `<name> (<code>)` choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

impl SelectOption {
    fn labelled(id: i64, name: &str, code: &str) -> Self {
        Self {
            id,
            label: format!("{} ({})", display_text(name), display_text(code)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub students: Vec<SelectOption>,
    pub courses: Vec<SelectOption>,
}

pub struct PreferenceForm {
    client: ApiClient,
    options: Mutex<FormOptions>,
}

impl PreferenceForm {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            options: Mutex::new(FormOptions::default()),
        }
    }

    /// Load both dropdowns concurrently.
    pub async fn load(&self) {
        tokio::join!(self.load_students(), self.load_courses());
    }

    /// Returns `true` when the student options were replaced.
    pub async fn load_students(&self) -> bool {
        match self.fetch::<Student>("/students").await {
            Ok(students) => {
                self.lock().students = students
                    .iter()
                    .map(|s| SelectOption::labelled(s.id, &s.name, &s.code))
                    .collect();
                true
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load students for dropdown");
                false
            }
        }
    }

    /// Returns `true` when the course options were replaced.
    pub async fn load_courses(&self) -> bool {
        match self.fetch::<Course>("/courses").await {
            Ok(courses) => {
                self.lock().courses = courses
                    .iter()
                    .map(|c| SelectOption::labelled(c.id, &c.name, &c.code))
                    .collect();
                true
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load courses for dropdown");
                false
            }
        }
    }

    #[must_use]
    pub fn options(&self) -> FormOptions {
        self.lock().clone()
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.client.get_json(ApiRequest::get(path)).await
    }

    fn lock(&self) -> MutexGuard<'_, FormOptions> {
        self.options.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
