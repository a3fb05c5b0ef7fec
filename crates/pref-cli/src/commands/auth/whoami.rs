use pref_api::auth;

use crate::cli::GlobalFlags;
use crate::commands::require_session;
use crate::output::output;

pub async fn handle(app: &pref_api::App, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_session(app)?;
    let me = auth::me(app.client()).await?;
    output(&me, flags.format)
}
