use anyhow::Context;
use dialoguer::Password;
use pref_api::Section;
use pref_core::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::conclude;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    username: String,
    role: Role,
    storage: &'static str,
}

pub async fn handle(
    args: &AuthLoginArgs,
    app: &pref_api::App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::new()
            .with_prompt(format!("Password for {}", args.username))
            .interact()
            .context("failed to read password")?,
    };

    let result = app.login(&args.username, &password).await;
    let session = conclude(app, Section::Login, result)?;

    output(
        &AuthLoginResponse {
            username: session.username,
            role: session.role,
            storage: app.session().storage_name(),
        },
        flags.format,
    )
}
