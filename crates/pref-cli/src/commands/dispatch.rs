use pref_api::App;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, app, flags).await,
        Commands::Dashboard => commands::dashboard::handle(app, flags).await,
        Commands::Students { action } => commands::students::handle(&action, app, flags).await,
        Commands::Courses { action } => commands::courses::handle(&action, app, flags).await,
        Commands::Packs { action } => commands::packs::handle(&action, app, flags).await,
        Commands::Preferences { action } => {
            commands::preferences::handle(&action, app, flags).await
        }
        Commands::Grades { action } => commands::grades::handle(&action, app, flags).await,
        Commands::Services { action } => commands::services::handle(&action, app, flags).await,
        Commands::Monitor { action } => commands::monitor::handle(&action, app, flags).await,
        Commands::Nav => commands::nav::handle(app, flags),
    }
}
