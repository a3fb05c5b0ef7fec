use pref_api::{App, Section};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::{conclude, require_session};
use crate::output::print_list;

/// Handle `prefs courses`.
pub async fn handle(action: &CourseCommands, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_session(app)?;
    app.screen().activate(Section::Courses);

    match action {
        CourseCommands::List { course_type } => {
            conclude(app, Section::Courses, app.courses.load().await)?;
            print_list(&app.courses.filter_by_type(*course_type), flags.format)
        }
    }
}
