use pref_api::{App, Section};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PackCommands;
use crate::commands::{conclude, require_session};
use crate::output::print_list;

/// Handle `prefs packs`.
pub async fn handle(action: &PackCommands, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_session(app)?;
    app.screen().activate(Section::Packs);

    match action {
        PackCommands::List { year } => {
            conclude(app, Section::Packs, app.packs.load().await)?;
            print_list(&app.packs.filter_by_year(*year), flags.format)
        }
    }
}
