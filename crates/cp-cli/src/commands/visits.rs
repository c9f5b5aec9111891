use cp_client::services::visits;
use cp_core::datefmt::render_timestamp;
use cp_core::entities::Visit;
use cp_core::payloads::CreateVisitPayload;
use cp_core::validation::require_field;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VisitsCommands;
use crate::commands::shared::parse::parse_timestamp;
use crate::context::AppContext;
use crate::output::{output, output_list};

pub(super) const EMPTY: &str = "No visits scheduled.";

#[derive(Serialize)]
pub(super) struct VisitRow {
    id: String,
    child: String,
    from: String,
    to: String,
    location: String,
    notes: Option<String>,
}

pub(super) fn row(visit: &Visit) -> VisitRow {
    VisitRow {
        id: visit.id.clone(),
        child: visit.child_id.clone(),
        from: render_timestamp(visit.start_time),
        to: render_timestamp(visit.end_time),
        location: visit.location.clone(),
        notes: visit.notes.clone(),
    }
}

/// Handle `coparent visits`.
pub async fn handle(
    action: &VisitsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VisitsCommands::List { plan_id } => {
            let list = visits::list_by_plan(&ctx.client, plan_id).await?;
            output_list(&list, flags.format, EMPTY, row)
        }
        VisitsCommands::Add(args) => {
            let user = ctx.client.require_user()?;
            let payload = CreateVisitPayload {
                plan_id: args.plan_id.clone(),
                child_id: args.child_id.clone(),
                parent_id: user.id,
                start_time: parse_timestamp(&args.start, "start")?,
                end_time: parse_timestamp(&args.end, "end")?,
                location: require_field("Location", &args.location)?.to_string(),
                notes: args.notes.clone(),
            };
            let visit = visits::create(&ctx.client, &payload).await?;
            output(&visit, flags.format)
        }
    }
}
