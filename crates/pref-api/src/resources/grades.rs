use std::collections::HashSet;

use pref_core::entities::Grade;
use pref_core::sanitize::display_text;

use super::{RenderedList, Resource, ResourceController};
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::screen::{NoticeKind, Section};

/// `/grades`: authenticated, read-only. Rows arrive from QuickGrade.
#[derive(Debug, Clone, Copy)]
pub struct Grades;

impl Resource for Grades {
    type Item = Grade;

    const SECTION: Section = Section::Grades;
    const PATH: &'static str = "/grades";
    const READ_AUTH: bool = true;
    const NOUN: &'static str = "grade";
    const TITLE: &'static str = "Grade";
    const PLURAL: &'static str = "grades";
    const PLACEHOLDER: &'static str =
        "No grades found. Grades are received from QuickGrade messaging service.";
    const HEADERS: &'static [&'static str] = &["Student", "Course", "Grade", "Result", "Received"];

    fn id(item: &Grade) -> Option<i64> {
        item.id
    }

    fn row(item: &Grade) -> Vec<String> {
        vec![
            item.student_code.clone(),
            item.course_code.clone(),
            format!("{}/10", item.grade),
            if item.passed() { "PASS" } else { "FAIL" }.to_string(),
            item.received_display(),
        ]
    }
}

/// Unique student codes in first-seen order.
#[must_use]
pub fn student_codes(grades: &[Grade]) -> Vec<String> {
    let mut seen = HashSet::new();
    grades
        .iter()
        .filter(|g| seen.insert(g.student_code.as_str()))
        .map(|g| display_text(&g.student_code).into_owned())
        .collect()
}

impl ResourceController<Grades> {
    /// Filter the cached grades by exact student code; `None` shows all.
    pub fn filter_by_student(&self, student_code: Option<&str>) -> RenderedList {
        self.filter(|grade| student_code.is_none_or(|code| grade.student_code == code))
    }

    #[must_use]
    pub fn filter_options(&self) -> Vec<String> {
        student_codes(&self.items())
    }

    /// `GET /grades/student/{code}`. Renders the result; the cache keeps the
    /// full collection.
    ///
    /// # Errors
    ///
    /// `Transport`, `Status`, or `Decode`.
    pub async fn by_student(&self, student_code: &str) -> Result<Vec<Grade>, ApiError> {
        self.fetch_subset("student", student_code).await
    }

    /// `GET /grades/course/{code}`.
    ///
    /// # Errors
    ///
    /// `Transport`, `Status`, or `Decode`.
    pub async fn by_course(&self, course_code: &str) -> Result<Vec<Grade>, ApiError> {
        self.fetch_subset("course", course_code).await
    }

    /// The ticket is taken before the request, so a subset that answers
    /// after a newer load of the section never overwrites that load's view.
    async fn fetch_subset(&self, scope: &str, code: &str) -> Result<Vec<Grade>, ApiError> {
        let ticket = self.screen().ticket(Grades::SECTION);
        let path = format!("/grades/{scope}/{}", urlencoding::encode(code));
        match self
            .client()
            .get_json::<Vec<Grade>>(ApiRequest::get(path).authenticated(true))
            .await
        {
            Ok(grades) => {
                self.show_subset(ticket, &grades);
                tracing::debug!(scope, count = grades.len(), "grade subset loaded");
                Ok(grades)
            }
            Err(error) => {
                tracing::warn!(scope, %error, "failed to load grade subset");
                let text = error.notice_generic("Failed to load grades");
                self.screen().notify(ticket, NoticeKind::Error, text);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grade(student: &str, value: f64) -> Grade {
        Grade {
            id: None,
            student_code: student.into(),
            course_code: "C1".into(),
            grade: value,
            received_at: Some("2025-01-12T10:15:30".into()),
        }
    }

    #[test]
    fn row_marks_pass_and_fail() {
        assert_eq!(Grades::row(&grade("S1", 5.0))[3], "PASS");
        assert_eq!(Grades::row(&grade("S1", 4.5))[3], "FAIL");
        assert_eq!(Grades::row(&grade("S1", 7.5))[2], "7.5/10");
    }

    #[test]
    fn codes_are_unique() {
        let grades = [grade("S2", 6.0), grade("S1", 7.0), grade("S2", 9.0)];
        assert_eq!(student_codes(&grades), vec!["S2", "S1"]);
    }
}
