use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Minimum passing grade on the 0–10 scale.
pub const PASSING_GRADE: f64 = 5.0;

/// A grade record published by QuickGrade and stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(default)]
    pub id: Option<i64>,
    pub student_code: String,
    pub course_code: String,
    pub grade: f64,
    /// Kept as sent; the backend emits zone-less local timestamps.
    #[serde(default)]
    pub received_at: Option<String>,
}

impl Grade {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.grade >= PASSING_GRADE
    }

    /// Parse `received_at` as RFC 3339 or as a zone-less ISO timestamp.
    #[must_use]
    pub fn received_at(&self) -> Option<NaiveDateTime> {
        let raw = self.received_at.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    }

    /// `received_at` formatted for display, or the raw value if unparseable.
    #[must_use]
    pub fn received_display(&self) -> String {
        match (self.received_at(), self.received_at.as_deref()) {
            (Some(dt), _) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            (None, Some(raw)) => crate::sanitize::display_text(raw).into_owned(),
            (None, None) => String::from("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: f64, received_at: Option<&str>) -> Grade {
        Grade {
            id: Some(1),
            student_code: "S1".into(),
            course_code: "C1".into(),
            grade: value,
            received_at: received_at.map(str::to_string),
        }
    }

    #[test]
    fn pass_threshold_is_inclusive() {
        assert!(grade(5.0, None).passed());
        assert!(!grade(4.99, None).passed());
    }

    #[test]
    fn parses_local_timestamp_with_fraction() {
        let g = grade(8.0, Some("2025-01-12T10:15:30.123456"));
        assert_eq!(g.received_display(), "2025-01-12 10:15:30");
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let g = grade(8.0, Some("2025-01-12T10:15:30Z"));
        assert_eq!(g.received_display(), "2025-01-12 10:15:30");
    }

    #[test]
    fn unparseable_timestamp_is_shown_raw() {
        let g = grade(8.0, Some("yesterday"));
        assert_eq!(g.received_display(), "yesterday");
        assert_eq!(grade(8.0, None).received_display(), "N/A");
    }
}
