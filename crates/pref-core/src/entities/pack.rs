use serde::{Deserialize, Serialize};

/// A course pack (year + semester grouping).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pack {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub year: i32,
    pub semester: i32,
}
