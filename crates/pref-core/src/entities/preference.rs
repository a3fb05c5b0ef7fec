use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A student's ranked course preference with names resolved by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub student_code: String,
    pub course_id: i64,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub course_code: String,
    pub pack_name: Option<String>,
    pub rank_order: i32,
}

/// Body of `POST /preferences`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPreference {
    pub student_id: i64,
    pub course_id: i64,
    pub rank_order: i32,
}

impl NewPreference {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the rank is below 1.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.rank_order < 1 {
            return Err(CoreError::Validation(format!(
                "rank order must be at least 1, got {}",
                self.rank_order
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_camel_case() {
        let draft = NewPreference {
            student_id: 3,
            course_id: 7,
            rank_order: 1,
        };
        let json = serde_json::to_value(draft).unwrap();
        assert_eq!(json, serde_json::json!({"studentId": 3, "courseId": 7, "rankOrder": 1}));
    }

    #[test]
    fn rank_zero_is_rejected() {
        let draft = NewPreference {
            student_id: 3,
            course_id: 7,
            rank_order: 0,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn pack_name_may_be_missing() {
        let raw = r#"{"id":1,"studentId":3,"studentName":"Ana","studentCode":"S3",
            "courseId":7,"courseName":"Cloud","courseCode":"C7","rankOrder":2,"version":0}"#;
        let pref: Preference = serde_json::from_str(raw).unwrap();
        assert!(pref.pack_name.is_none());
        assert_eq!(pref.rank_order, 2);
    }
}
