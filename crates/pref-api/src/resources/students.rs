use pref_core::CoreError;
use pref_core::capabilities::Action;
use pref_core::entities::{NewStudent, Student};

use super::{Mutable, RenderedList, Resource, ResourceController};
use crate::screen::Section;

/// `/students`: public reads, authenticated writes.
#[derive(Debug, Clone, Copy)]
pub struct Students;

impl Resource for Students {
    type Item = Student;

    const SECTION: Section = Section::Students;
    const PATH: &'static str = "/students";
    const READ_AUTH: bool = false;
    const NOUN: &'static str = "student";
    const TITLE: &'static str = "Student";
    const PLURAL: &'static str = "students";
    const PLACEHOLDER: &'static str = "No students found";
    const HEADERS: &'static [&'static str] = &["ID", "Code", "Name", "Email", "Year"];
    const ACTIONS: &'static [Action] = &[Action::CreateStudent, Action::DeleteStudent];

    fn id(item: &Student) -> Option<i64> {
        Some(item.id)
    }

    fn row(item: &Student) -> Vec<String> {
        vec![
            item.id.to_string(),
            item.code.clone(),
            item.name.clone(),
            item.email.clone(),
            item.year.to_string(),
        ]
    }
}

impl Mutable for Students {
    type Draft = NewStudent;

    const CONFIRM_PROMPT: &'static str = "Are you sure you want to delete this student?";

    fn validate(draft: &NewStudent) -> Result<(), CoreError> {
        draft.validate()
    }
}

/// Case-insensitive substring match over code, name, and email.
/// A blank term matches everything.
#[must_use]
pub fn matches_search(student: &Student, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [&student.code, &student.name, &student.email]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&term))
}

impl ResourceController<Students> {
    /// Filter the cached students by a search term.
    pub fn search(&self, term: &str) -> RenderedList {
        self.filter(|student| matches_search(student, term))
    }
}
