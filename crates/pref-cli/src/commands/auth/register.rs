use anyhow::Context;
use dialoguer::Password;
use pref_api::Section;
use pref_core::dto::RegisterRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::commands::conclude;
use crate::output::output;

pub async fn handle(
    args: &AuthRegisterArgs,
    app: &pref_api::App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("failed to read password")?,
    };

    let request = RegisterRequest {
        username: args.username.clone(),
        password,
        name: args.name.clone(),
        email: args.email.clone(),
        role: args.role,
    };

    let result = app.register(&request).await;
    // Success leaves its notice on the login section.
    let section = if result.is_ok() {
        Section::Login
    } else {
        Section::Register
    };
    let response = conclude(app, section, result)?;
    output(&response, flags.format)
}
