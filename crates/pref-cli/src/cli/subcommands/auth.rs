use clap::{Args, Subcommand};
use pref_core::Role;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in and store the session.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
    /// Create a new account.
    Register(AuthRegisterArgs),
    /// Ask the backend who the stored token belongs to.
    Whoami,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    pub username: String,
    /// Prompted for when absent.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub username: String,
    /// Prompted for (with confirmation) when absent.
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// ADMIN, INSTRUCTOR or STUDENT.
    #[arg(long, default_value = "STUDENT")]
    pub role: Role,
}
