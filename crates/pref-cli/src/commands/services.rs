use pref_api::{App, Section, Slot};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ServiceCommands;
use crate::commands::{conclude, print_slot, require_session};

/// Handle `prefs services`.
pub async fn handle(
    action: &ServiceCommands,
    app: &App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_session(app)?;
    app.screen().activate(Section::Microservices);

    let slot = match action {
        ServiceCommands::Health => {
            conclude(app, Section::Microservices, app.services.health().await)?;
            Slot::Health
        }
        ServiceCommands::Stats => {
            conclude(app, Section::Microservices, app.services.statistics().await)?;
            Slot::Statistics
        }
    };
    print_slot(app, Section::Microservices, slot, flags)
}
