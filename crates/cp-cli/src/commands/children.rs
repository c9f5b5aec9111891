use cp_client::services::children;
use cp_core::datefmt::render_date;
use cp_core::entities::Child;
use cp_core::payloads::CreateChildPayload;
use cp_core::validation::require_field;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChildrenCommands;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::{output, output_list};

pub(super) const EMPTY: &str = "No children found.";

#[derive(Serialize)]
pub(super) struct ChildRow {
    id: String,
    name: String,
    born: String,
}

pub(super) fn row(child: &Child) -> ChildRow {
    ChildRow {
        id: child.id.clone(),
        name: child.first_name.clone(),
        born: render_date(child.birth_date),
    }
}

/// Handle `coparent children`.
pub async fn handle(
    action: &ChildrenCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChildrenCommands::List => {
            let list = children::list(&ctx.client).await?;
            output_list(&list, flags.format, EMPTY, row)
        }
        ChildrenCommands::Add {
            first_name,
            birth_date,
        } => {
            let user = ctx.client.require_user()?;
            let payload = CreateChildPayload {
                first_name: require_field("First name", first_name)?.to_string(),
                birth_date: parse_date(birth_date, "birth date")?,
                parent_id: user.id,
            };
            let child = children::create(&ctx.client, &payload).await?;
            output(&child, flags.format)
        }
    }
}
