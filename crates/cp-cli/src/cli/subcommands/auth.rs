use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password and store the session.
    Login(AuthLoginArgs),
    /// Create an account (does not log in).
    Register(AuthRegisterArgs),
    /// Clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// One of: parent, mediator, admin.
    #[arg(long, default_value = "parent")]
    pub role: String,
}
