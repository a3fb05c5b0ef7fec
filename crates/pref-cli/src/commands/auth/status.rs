use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle(app: &pref_api::App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let _ = app.session().restore();
    let status = app.session().status();
    if status.expired {
        tracing::warn!("stored token has expired; log in again");
    }
    output(&status, flags.format)
}
