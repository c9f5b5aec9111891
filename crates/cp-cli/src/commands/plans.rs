use cp_client::services::plans;
use cp_client::{PlanBoard, invites};
use cp_core::datefmt::render_date;
use cp_core::entities::ParentingPlan;
use cp_core::enums::PlanStatus;
use cp_core::payloads::CreatePlanPayload;
use cp_core::validation::require_field;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlansCommands;
use crate::cli::subcommands::plans::PlanCreateArgs;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::{output, output_list};

pub(super) const EMPTY: &str = "No plans found.";

#[derive(Serialize)]
pub(super) struct PlanRow {
    id: String,
    title: String,
    status: String,
    dates: String,
    invites: String,
}

pub(super) fn row(plan: &ParentingPlan) -> PlanRow {
    let dates = match (plan.start_date, plan.end_date) {
        (None, None) => String::from("-"),
        (start, end) => format!(
            "{} to {}",
            start.map_or_else(|| String::from("?"), render_date),
            end.map_or_else(|| String::from("?"), render_date)
        ),
    };
    let total = plan.invites().len();
    let pending = plan.pending_invites().count();
    PlanRow {
        id: plan.id.clone(),
        title: plan.title.clone(),
        status: plan.status.to_string(),
        dates,
        invites: format!("{total} ({pending} pending)"),
    }
}

fn create_payload(args: &PlanCreateArgs, created_by: String) -> anyhow::Result<CreatePlanPayload> {
    Ok(CreatePlanPayload {
        title: require_field("Title", &args.title)?.to_string(),
        description: args
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        start_date: args
            .start
            .as_deref()
            .map(|raw| parse_date(raw, "start date"))
            .transpose()?,
        end_date: args
            .end
            .as_deref()
            .map(|raw| parse_date(raw, "end date"))
            .transpose()?,
        status: args
            .status
            .as_deref()
            .map(str::parse::<PlanStatus>)
            .transpose()?,
        created_by,
        child_ids: args.children.clone(),
    })
}

/// Handle `coparent plans`.
pub async fn handle(
    action: &PlansCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PlansCommands::List => {
            let board = PlanBoard::load(&ctx.client).await?;
            output_list(board.plans(), flags.format, EMPTY, row)
        }
        PlansCommands::Create(args) => {
            let user = ctx.client.require_user()?;
            let payload = create_payload(args, user.id)?;
            let plan = plans::create(&ctx.client, &payload).await?;
            output(&plan, flags.format)
        }
        PlansCommands::Invite { plan_id, email } => {
            let mut board = PlanBoard::load(&ctx.client).await?;
            let invite = invites::send_invite(&ctx.client, &mut board, plan_id, email).await?;
            output(&invite, flags.format)
        }
        PlansCommands::Accept { invite_id } => {
            let mut board = PlanBoard::load(&ctx.client).await?;
            let invite = invites::accept_invite(&ctx.client, &mut board, invite_id).await?;
            output(&invite, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use cp_core::entities::PlanInvite;
    use cp_core::enums::InviteStatus;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(title: &str) -> PlanCreateArgs {
        PlanCreateArgs {
            title: title.into(),
            description: Some("  ".into()),
            start: Some("2025-06-01".into()),
            end: None,
            status: Some("draft".into()),
            children: vec!["c-1".into()],
        }
    }

    #[test]
    fn payload_trims_and_parses_arguments() {
        let payload = create_payload(&args(" Summer "), "u-1".into()).expect("payload");
        assert_eq!(payload.title, "Summer");
        assert_eq!(payload.description, None);
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(payload.status, Some(PlanStatus::Draft));
        assert_eq!(payload.child_ids, vec!["c-1".to_string()]);
    }

    #[test]
    fn payload_rejects_blank_title_and_unknown_status() {
        assert!(create_payload(&args("  "), "u-1".into()).is_err());

        let mut bad = args("Summer");
        bad.status = Some("paused".into());
        assert!(create_payload(&bad, "u-1".into()).is_err());
    }

    #[test]
    fn row_summarizes_dates_and_invites() {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let invite = |id: &str, status| PlanInvite {
            id: id.into(),
            plan_id: "p-1".into(),
            email: "sam@example.com".into(),
            status,
            created_at,
        };
        let plan = ParentingPlan {
            id: "p-1".into(),
            title: "Summer".into(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            end_date: None,
            status: PlanStatus::Active,
            created_by: "u-1".into(),
            created_at,
            updated_at: None,
            invites: Some(vec![
                invite("i-1", InviteStatus::Pending),
                invite("i-2", InviteStatus::Accepted),
            ]),
            children: None,
        };

        let row = row(&plan);
        assert_eq!(row.dates, "Jun 01, 2025 to ?");
        assert_eq!(row.invites, "2 (1 pending)");
        assert_eq!(row.status, "active");
    }
}
