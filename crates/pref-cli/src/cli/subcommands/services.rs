use clap::Subcommand;

/// QuickGrade commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ServiceCommands {
    /// Availability of the QuickGrade service.
    Health,
    /// Grade statistics computed by QuickGrade.
    Stats,
}
