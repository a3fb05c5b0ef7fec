use anyhow::bail;
use pref_api::{App, Section, Slot};
use pref_core::sanitize::display_text;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{LOGIN_HINT, print_slot};

/// Handle `prefs dashboard`: the startup path of the client.
pub async fn handle(app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    if app.start().await == Section::Login {
        bail!(LOGIN_HINT);
    }

    if flags.format == OutputFormat::Table
        && let Some(username) = app.session().username()
    {
        println!("Welcome, {}!", display_text(&username));
    }
    print_slot(app, Section::Dashboard, Slot::Summary, flags)
}
