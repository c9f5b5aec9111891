use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DashboardResponse {
    welcome: String,
    children: usize,
    plans: usize,
    upcoming_visits: usize,
    unread_messages: usize,
}

/// Handle `coparent dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.client.require_user()?;
    let summary = cp_client::dashboard::summarize(&ctx.client, chrono::Utc::now()).await?;

    output(
        &DashboardResponse {
            welcome: format!("Welcome back, {}", user.full_name),
            children: summary.children,
            plans: summary.plans,
            upcoming_visits: summary.upcoming_visits,
            unread_messages: summary.unread_messages,
        },
        flags.format,
    )
}
