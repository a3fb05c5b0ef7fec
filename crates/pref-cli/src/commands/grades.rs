use pref_api::{App, Section, Slot};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GradeCommands;
use crate::commands::{conclude, print_slot, require_session};
use crate::output::output;

/// Handle `prefs grades`.
pub async fn handle(action: &GradeCommands, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_session(app)?;
    app.screen().activate(Section::Grades);

    match action {
        GradeCommands::List {
            student,
            course,
            filter,
        } => {
            match (student, course) {
                (Some(code), _) => {
                    conclude(app, Section::Grades, app.grades.by_student(code).await)?;
                }
                (None, Some(code)) => {
                    conclude(app, Section::Grades, app.grades.by_course(code).await)?;
                }
                (None, None) => {
                    conclude(app, Section::Grades, app.grades.load().await)?;
                    if let Some(code) = filter {
                        app.grades.filter_by_student(Some(code));
                    }
                }
            }
            print_slot(app, Section::Grades, Slot::List, flags)
        }
        GradeCommands::Codes => {
            conclude(app, Section::Grades, app.grades.load().await)?;
            output(&app.grades.filter_options(), flags.format)
        }
    }
}
