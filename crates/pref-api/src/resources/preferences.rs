use std::collections::HashSet;

use pref_core::CoreError;
use pref_core::capabilities::Action;
use pref_core::entities::{NewPreference, Preference};
use pref_core::sanitize::{display_opt, display_text};
use serde::Serialize;

use super::{Mutable, RenderedList, Resource, ResourceController};
use crate::screen::Section;

/// `/preferences`: authenticated reads and writes.
#[derive(Debug, Clone, Copy)]
pub struct Preferences;

impl Resource for Preferences {
    type Item = Preference;

    const SECTION: Section = Section::Preferences;
    const PATH: &'static str = "/preferences";
    const READ_AUTH: bool = true;
    const NOUN: &'static str = "preference";
    const TITLE: &'static str = "Preference";
    const PLURAL: &'static str = "preferences";
    const PLACEHOLDER: &'static str = "No preferences found";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Student",
        "Student Code",
        "Course",
        "Course Code",
        "Pack",
        "Rank",
    ];
    const ACTIONS: &'static [Action] = &[Action::CreatePreference, Action::DeletePreference];

    fn id(item: &Preference) -> Option<i64> {
        Some(item.id)
    }

    fn row(item: &Preference) -> Vec<String> {
        vec![
            item.id.to_string(),
            item.student_name.clone(),
            item.student_code.clone(),
            item.course_name.clone(),
            item.course_code.clone(),
            display_opt(item.pack_name.as_deref()),
            item.rank_order.to_string(),
        ]
    }
}

impl Mutable for Preferences {
    type Draft = NewPreference;

    const CONFIRM_PROMPT: &'static str = "Are you sure you want to delete this preference?";

    fn validate(draft: &NewPreference) -> Result<(), CoreError> {
        draft.validate()
    }
}

/// Entry of the "filter by student" choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentOption {
    pub id: i64,
    pub name: String,
}

/// Unique `(studentId, studentName)` pairs in first-seen order.
#[must_use]
pub fn student_options(preferences: &[Preference]) -> Vec<StudentOption> {
    let mut seen = HashSet::new();
    preferences
        .iter()
        .filter(|p| seen.insert((p.student_id, p.student_name.as_str())))
        .map(|p| StudentOption {
            id: p.student_id,
            name: display_text(&p.student_name).into_owned(),
        })
        .collect()
}

impl ResourceController<Preferences> {
    /// Filter the cached preferences by student id; `None` shows all.
    pub fn filter_by_student(&self, student_id: Option<i64>) -> RenderedList {
        self.filter(|pref| student_id.is_none_or(|id| pref.student_id == id))
    }

    #[must_use]
    pub fn filter_options(&self) -> Vec<StudentOption> {
        student_options(&self.items())
    }
}
