mod login;
mod logout;
mod register;
mod status;
mod whoami;

use pref_api::App;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `prefs auth <subcommand>`.
pub async fn handle(action: &AuthCommands, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, app, flags).await,
        AuthCommands::Logout => logout::handle(app, flags),
        AuthCommands::Status => status::handle(app, flags),
        AuthCommands::Register(args) => register::handle(args, app, flags).await,
        AuthCommands::Whoami => whoami::handle(app, flags).await,
    }
}
