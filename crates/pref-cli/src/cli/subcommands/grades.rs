use clap::Subcommand;

/// Grade commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GradeCommands {
    /// List grades.
    List {
        /// Student code, queried on the server.
        #[arg(long, conflicts_with_all = ["course", "filter"])]
        student: Option<String>,
        /// Course code, queried on the server.
        #[arg(long, conflicts_with = "filter")]
        course: Option<String>,
        /// Student code, matched against the loaded grades.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Student codes present in the loaded grades.
    Codes,
}
