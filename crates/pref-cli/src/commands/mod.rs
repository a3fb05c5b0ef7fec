pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod dispatch;
pub mod grades;
pub mod monitor;
pub mod nav;
pub mod packs;
pub mod preferences;
pub mod services;
pub mod students;

use anyhow::anyhow;
use pref_api::{ApiError, App, Section, Slot};
use pref_core::{Action, Session, capabilities};

use crate::cli::GlobalFlags;
use crate::output;

const LOGIN_HINT: &str = "not logged in: run `prefs auth login <username>`";

/// Restore the stored session or fail with a login hint.
pub(crate) fn require_session(app: &App) -> anyhow::Result<Session> {
    app.session().restore().ok_or_else(|| anyhow!(LOGIN_HINT))
}

/// Warn when the role is not offered `action`. The request is still sent.
pub(crate) fn hint_capability(session: &Session, action: Action) {
    if !capabilities(session.role, action) {
        eprintln!(
            "hint: {} accounts are not offered `{}`; the server will decide",
            session.role,
            action.as_str()
        );
    }
}

/// Print the notice left on `section`, then map `result` so an error
/// carries the notice text.
pub(crate) fn conclude<T>(
    app: &App,
    section: Section,
    result: Result<T, ApiError>,
) -> anyhow::Result<T> {
    let notice = app.screen().notice(section);
    match result {
        Ok(value) => {
            if let Some(notice) = &notice {
                output::print_notice(notice);
            }
            Ok(value)
        }
        Err(error) => {
            let message = notice.map_or_else(|| error.to_string(), |notice| notice.text);
            Err(anyhow::Error::new(error).context(message))
        }
    }
}

/// Print what `section` shows in `slot`, if anything.
pub(crate) fn print_slot(
    app: &App,
    section: Section,
    slot: Slot,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match app.screen().view(section, slot) {
        Some(view) => output::print_view(&view, flags.format),
        None => Ok(()),
    }
}
