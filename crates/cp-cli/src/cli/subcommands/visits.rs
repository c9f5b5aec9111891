use clap::{Args, Subcommand};

/// Visit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VisitsCommands {
    /// List visits scheduled under a plan.
    List { plan_id: String },
    /// Schedule a visit.
    Add(VisitAddArgs),
}

#[derive(Clone, Debug, Args)]
pub struct VisitAddArgs {
    pub plan_id: String,
    pub child_id: String,
    /// Start, RFC 3339 or `YYYY-MM-DD HH:MM` (UTC).
    pub start: String,
    /// End, RFC 3339 or `YYYY-MM-DD HH:MM` (UTC).
    pub end: String,
    pub location: String,
    #[arg(long)]
    pub notes: Option<String>,
}
