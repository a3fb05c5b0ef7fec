use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students.
    List {
        /// Case-insensitive match on name, code or email.
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a student.
    Add {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        year: i32,
    },
    /// Delete a student by ID.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}
