use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, CourseCommands, GradeCommands, MonitorCommands, PackCommands,
    PreferenceCommands, ServiceCommands, StudentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login, logout, registration, session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Summary counts and QuickGrade status.
    Dashboard,
    /// Students.
    Students {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Courses.
    Courses {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Course packs.
    Packs {
        #[command(subcommand)]
        action: PackCommands,
    },
    /// Student course preferences.
    Preferences {
        #[command(subcommand)]
        action: PreferenceCommands,
    },
    /// Grades received from QuickGrade.
    Grades {
        #[command(subcommand)]
        action: GradeCommands,
    },
    /// QuickGrade microservice.
    Services {
        #[command(subcommand)]
        action: ServiceCommands,
    },
    /// Backend actuator endpoints.
    Monitor {
        #[command(subcommand)]
        action: MonitorCommands,
    },
    /// Show the navigation menu for the current session.
    Nav,
}
