use pref_api::{App, Section, Slot};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MonitorCommands;
use crate::commands::{conclude, print_slot};

/// Handle `prefs monitor`. Actuator endpoints sit at the origin and need no
/// session.
pub async fn handle(
    action: &MonitorCommands,
    app: &App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    app.screen().activate(Section::Actuator);

    let slot = match action {
        MonitorCommands::Health => {
            conclude(app, Section::Actuator, app.monitor.health().await)?;
            Slot::Health
        }
        MonitorCommands::Info => {
            conclude(app, Section::Actuator, app.monitor.info().await)?;
            Slot::Info
        }
    };
    print_slot(app, Section::Actuator, slot, flags)
}
