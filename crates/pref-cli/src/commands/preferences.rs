use pref_api::forms::SelectOption;
use pref_api::resources::StudentOption;
use pref_api::{App, RemoveOutcome, Section, Slot};
use pref_core::Action;
use pref_core::entities::NewPreference;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PreferenceCommands;
use crate::commands::{conclude, hint_capability, print_slot, require_session};
use crate::confirm::confirmer;
use crate::output::{output, print_list, print_notice};

#[derive(Serialize)]
struct PreferenceOptionsResponse {
    students: Vec<SelectOption>,
    courses: Vec<SelectOption>,
    filter_students: Vec<StudentOption>,
}

/// Handle `prefs preferences`.
pub async fn handle(
    action: &PreferenceCommands,
    app: &App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = require_session(app)?;
    app.screen().activate(Section::Preferences);

    match action {
        PreferenceCommands::List { student } => {
            conclude(app, Section::Preferences, app.preferences.load().await)?;
            print_list(&app.preferences.filter_by_student(*student), flags.format)
        }
        PreferenceCommands::Add {
            student,
            course,
            rank,
        } => {
            hint_capability(&session, Action::CreatePreference);
            let draft = NewPreference {
                student_id: *student,
                course_id: *course,
                rank_order: *rank,
            };
            conclude(app, Section::Preferences, app.preferences.create(&draft).await)?;
            print_slot(app, Section::Preferences, Slot::List, flags)
        }
        PreferenceCommands::Delete { id, yes } => {
            hint_capability(&session, Action::DeletePreference);
            let confirm = confirmer(*yes);
            let outcome = app.preferences.remove(*id, confirm.as_ref()).await;
            match conclude(app, Section::Preferences, outcome)? {
                RemoveOutcome::Declined => {
                    eprintln!("cancelled");
                    Ok(())
                }
                RemoveOutcome::Removed => {
                    print_slot(app, Section::Preferences, Slot::List, flags)
                }
            }
        }
        PreferenceCommands::Options => {
            // Same loads as opening the section: list plus both dropdowns.
            app.show_section(Section::Preferences).await;
            if let Some(notice) = app.screen().notice(Section::Preferences) {
                print_notice(&notice);
            }

            let form = app.preference_form.options();
            output(
                &PreferenceOptionsResponse {
                    students: form.students,
                    courses: form.courses,
                    filter_students: app.preferences.filter_options(),
                },
                flags.format,
            )
        }
    }
}
