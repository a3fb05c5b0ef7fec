use clap::Subcommand;

/// Preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PreferenceCommands {
    /// List preferences.
    List {
        /// Only preferences of this student ID.
        #[arg(long)]
        student: Option<i64>,
    },
    /// Add a preference.
    Add {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        course: i64,
        #[arg(long)]
        rank: i32,
    },
    /// Delete a preference by ID.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Student and course choices for `preferences add`.
    Options,
}
