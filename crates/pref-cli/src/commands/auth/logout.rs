use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(app: &pref_api::App, flags: &GlobalFlags) -> anyhow::Result<()> {
    app.logout();
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
