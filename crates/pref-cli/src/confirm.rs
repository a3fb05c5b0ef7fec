use dialoguer::Confirm as Prompt;
use pref_api::{AutoConfirm, Confirm};

/// Interactive yes/no prompt on the terminal. Defaults to "no"; a prompt
/// that cannot be shown counts as declined.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        Prompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "confirmation prompt failed");
                false
            })
    }
}

/// `--yes` skips the prompt.
pub fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(TerminalConfirm)
    }
}
