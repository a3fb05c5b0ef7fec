use clap::Subcommand;
use pref_core::CourseType;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List courses.
    List {
        /// COMPULSORY or ELECTIVE.
        #[arg(long = "type")]
        course_type: Option<CourseType>,
    },
}
