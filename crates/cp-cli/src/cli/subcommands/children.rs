use clap::Subcommand;

/// Child commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChildrenCommands {
    /// List your children.
    List,
    /// Register a child under your account.
    Add {
        first_name: String,
        /// Birth date, `YYYY-MM-DD`.
        birth_date: String,
    },
}
