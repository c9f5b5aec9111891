use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, ChildrenCommands, JournalCommands, MessagesCommands, PlansCommands,
    VisitsCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Welcome screen and next steps.
    Home,
    /// Log in, register, log out, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Counts of children, plans, upcoming visits, and unread messages.
    Dashboard,
    /// Children registered to your account.
    Children {
        #[command(subcommand)]
        action: ChildrenCommands,
    },
    /// Parenting plans and plan invites.
    Plans {
        #[command(subcommand)]
        action: PlansCommands,
    },
    /// Scheduled visits for a plan.
    Visits {
        #[command(subcommand)]
        action: VisitsCommands,
    },
    /// The message thread of a plan.
    Messages {
        #[command(subcommand)]
        action: MessagesCommands,
    },
    /// Journal entries about a child.
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
}
