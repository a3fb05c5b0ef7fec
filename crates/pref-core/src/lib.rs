//! # pref-core
//!
//! Core types shared by every crate of the preference client:
//! - Entity snapshots mirrored from the REST backend (students, courses,
//!   packs, preferences, grades)
//! - `Role` and `CourseType` enums
//! - The authenticated `Session`
//! - Wire DTOs for auth, service health, and statistics
//! - Role-based capability checks for UI actions
//! - Sanitising of server-provided text before it reaches a terminal

pub mod capabilities;
pub mod dto;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod sanitize;
pub mod session;

pub use capabilities::{Action, capabilities};
pub use enums::{CourseType, Role};
pub use errors::CoreError;
pub use session::Session;
