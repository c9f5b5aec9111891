use clap::Subcommand;

/// Journal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JournalCommands {
    /// List journal entries about a child.
    List { child_id: String },
    /// Write a journal entry.
    Add {
        child_id: String,
        /// Entry date, `YYYY-MM-DD`.
        entry_date: String,
        content: String,
        /// Plan the entry belongs to.
        #[arg(long = "plan")]
        plan_id: Option<String>,
    },
}
