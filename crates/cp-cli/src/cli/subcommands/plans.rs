use clap::{Args, Subcommand};

/// Parenting plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlansCommands {
    /// List plans you own or belong to, with their invites.
    List,
    /// Create a plan.
    Create(PlanCreateArgs),
    /// Invite a co-parent to a plan by email.
    Invite { plan_id: String, email: String },
    /// Accept an invite sent to your email.
    Accept { invite_id: String },
}

#[derive(Clone, Debug, Args)]
pub struct PlanCreateArgs {
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Start date, `YYYY-MM-DD`.
    #[arg(long)]
    pub start: Option<String>,
    /// End date, `YYYY-MM-DD`.
    #[arg(long)]
    pub end: Option<String>,
    /// One of: active, draft, archived.
    #[arg(long)]
    pub status: Option<String>,
    /// Child id to attach (repeatable).
    #[arg(long = "child")]
    pub children: Vec<String>,
}
