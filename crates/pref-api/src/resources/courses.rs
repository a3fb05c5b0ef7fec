use pref_core::CourseType;
use pref_core::entities::Course;
use pref_core::sanitize::display_opt;

use super::{RenderedList, Resource, ResourceController};
use crate::screen::Section;

/// `/courses`: public, read-only.
#[derive(Debug, Clone, Copy)]
pub struct Courses;

impl Resource for Courses {
    type Item = Course;

    const SECTION: Section = Section::Courses;
    const PATH: &'static str = "/courses";
    const READ_AUTH: bool = false;
    const NOUN: &'static str = "course";
    const TITLE: &'static str = "Course";
    const PLURAL: &'static str = "courses";
    const PLACEHOLDER: &'static str = "No courses found";
    const HEADERS: &'static [&'static str] =
        &["ID", "Code", "Name", "Abbr", "Type", "Groups", "Description"];

    fn id(item: &Course) -> Option<i64> {
        Some(item.id)
    }

    fn row(item: &Course) -> Vec<String> {
        vec![
            item.id.to_string(),
            item.code.clone(),
            item.name.clone(),
            display_opt(item.abbr.as_deref()),
            item.course_type.to_string(),
            item.group_count
                .filter(|count| *count != 0)
                .map_or_else(|| String::from("N/A"), |count| count.to_string()),
            item.description.clone().unwrap_or_default(),
        ]
    }
}

impl ResourceController<Courses> {
    /// Filter the cached courses by type; `None` shows all of them.
    pub fn filter_by_type(&self, wanted: Option<CourseType>) -> RenderedList {
        self.filter(|course| wanted.is_none_or(|t| course.course_type == t))
    }
}
