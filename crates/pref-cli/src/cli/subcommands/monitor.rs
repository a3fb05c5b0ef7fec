use clap::Subcommand;

/// Actuator commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MonitorCommands {
    /// `/actuator/health`.
    Health,
    /// `/actuator/info`.
    Info,
}
