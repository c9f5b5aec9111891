//! Dashboard aggregation across every plan the user can see.

use chrono::{DateTime, Utc};
use cp_core::dashboard::DashboardSummary;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::services::{children, messages, plans, visits};

/// Fetch children, plans, then each plan's visits and each plan's messages,
/// one request at a time, and tally them against `now`.
///
/// Any failed call fails the whole summary.
///
/// # Errors
///
/// Propagates the first [`ApiError`] encountered.
pub async fn summarize(client: &ApiClient, now: DateTime<Utc>) -> Result<DashboardSummary, ApiError> {
    let children = children::list(client).await?;
    let plans = plans::list(client).await?;

    let mut all_visits = Vec::new();
    for plan in &plans {
        all_visits.extend(visits::list_by_plan(client, &plan.id).await?);
    }

    let mut all_messages = Vec::new();
    for plan in &plans {
        all_messages.extend(messages::list_by_plan(client, &plan.id).await?);
    }

    Ok(DashboardSummary::tally(
        children.len(),
        plans.len(),
        &all_visits,
        &all_messages,
        now,
    ))
}
