mod auth;
mod courses;
mod grades;
mod monitor;
mod packs;
mod preferences;
mod services;
mod students;

pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs};
pub use courses::CourseCommands;
pub use grades::GradeCommands;
pub use monitor::MonitorCommands;
pub use packs::PackCommands;
pub use preferences::PreferenceCommands;
pub use services::ServiceCommands;
pub use students::StudentCommands;
