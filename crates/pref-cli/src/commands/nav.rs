use pref_api::App;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `prefs nav`: menu entries for the stored session.
pub fn handle(app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let _ = app.session().restore();
    output(&app.navigation(), flags.format)
}
