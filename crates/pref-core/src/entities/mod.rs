//! Value snapshots of backend resources.
//!
//! The client never patches these in place; each successful load replaces
//! the whole collection.

mod course;
mod grade;
mod pack;
mod preference;
mod student;

pub use course::Course;
pub use grade::Grade;
pub use pack::Pack;
pub use preference::{NewPreference, Preference};
pub use student::{NewStudent, Student};
