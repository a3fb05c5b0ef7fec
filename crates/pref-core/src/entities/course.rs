use serde::{Deserialize, Serialize};

use crate::enums::CourseType;

/// A course as served by `GET /courses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub abbr: Option<String>,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub group_count: Option<i32>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_fields() {
        let raw = r#"{"id":7,"type":"OPTIONAL","code":"C07","abbr":null,"name":"Cloud","groupCount":3}"#;
        let course: Course = serde_json::from_str(raw).unwrap();
        assert_eq!(course.course_type, CourseType::Elective);
        assert_eq!(course.group_count, Some(3));
        assert!(course.abbr.is_none());
        assert!(course.description.is_none());
    }
}
