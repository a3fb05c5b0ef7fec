use pref_api::{App, RemoveOutcome, Section, Slot};
use pref_core::Action;
use pref_core::entities::NewStudent;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::commands::{conclude, hint_capability, print_slot, require_session};
use crate::confirm::confirmer;
use crate::output::print_list;

/// Handle `prefs students`.
pub async fn handle(
    action: &StudentCommands,
    app: &App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = require_session(app)?;
    app.screen().activate(Section::Students);

    match action {
        StudentCommands::List { search } => {
            conclude(app, Section::Students, app.students.load().await)?;
            match search {
                Some(term) => print_list(&app.students.search(term), flags.format),
                None => print_slot(app, Section::Students, Slot::List, flags),
            }
        }
        StudentCommands::Add {
            code,
            name,
            email,
            year,
        } => {
            hint_capability(&session, Action::CreateStudent);
            let draft = NewStudent {
                code: code.clone(),
                name: name.clone(),
                email: email.clone(),
                year: *year,
            };
            conclude(app, Section::Students, app.students.create(&draft).await)?;
            print_slot(app, Section::Students, Slot::List, flags)
        }
        StudentCommands::Delete { id, yes } => {
            hint_capability(&session, Action::DeleteStudent);
            let confirm = confirmer(*yes);
            let outcome = app.students.remove(*id, confirm.as_ref()).await;
            match conclude(app, Section::Students, outcome)? {
                RemoveOutcome::Declined => {
                    eprintln!("cancelled");
                    Ok(())
                }
                RemoveOutcome::Removed => print_slot(app, Section::Students, Slot::List, flags),
            }
        }
    }
}
