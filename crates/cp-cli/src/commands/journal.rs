use cp_client::services::journal;
use cp_core::datefmt::render_date;
use cp_core::entities::JournalEntry;
use cp_core::payloads::CreateJournalPayload;
use cp_core::validation::require_field;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JournalCommands;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::{output, output_list};

pub(super) const EMPTY: &str = "No journal entries.";

#[derive(Serialize)]
pub(super) struct EntryRow {
    id: String,
    date: String,
    author: String,
    content: String,
}

pub(super) fn row(entry: &JournalEntry) -> EntryRow {
    EntryRow {
        id: entry.id.clone(),
        date: render_date(entry.entry_date),
        author: entry.author_id.clone(),
        content: entry.content.clone().unwrap_or_default(),
    }
}

/// Handle `coparent journal`.
pub async fn handle(
    action: &JournalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JournalCommands::List { child_id } => {
            let entries = journal::list_by_child(&ctx.client, child_id).await?;
            output_list(&entries, flags.format, EMPTY, row)
        }
        JournalCommands::Add {
            child_id,
            entry_date,
            content,
            plan_id,
        } => {
            let user = ctx.client.require_user()?;
            let payload = CreateJournalPayload {
                child_id: child_id.clone(),
                author_id: user.id,
                content: require_field("Entry", content)?.to_string(),
                entry_date: parse_date(entry_date, "entry date")?,
                plan_id: plan_id.clone(),
            };
            let entry = journal::create(&ctx.client, &payload).await?;
            output(&entry, flags.format)
        }
    }
}
