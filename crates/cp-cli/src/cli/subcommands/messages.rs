use clap::Subcommand;

/// Message commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MessagesCommands {
    /// Show a plan's message thread.
    List { plan_id: String },
    /// Send a message within a plan.
    Send {
        plan_id: String,
        receiver_id: String,
        content: String,
    },
}
