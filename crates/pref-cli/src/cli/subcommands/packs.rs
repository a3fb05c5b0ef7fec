use clap::Subcommand;

/// Pack commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PackCommands {
    /// List packs.
    List {
        #[arg(long)]
        year: Option<i32>,
    },
}
