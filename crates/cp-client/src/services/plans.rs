//! Parenting plans and their invites.

use cp_core::entities::{ParentingPlan, PlanInvite};
use cp_core::payloads::{AcceptInvitePayload, CreateInvitePayload, CreatePlanPayload};
use cp_core::responses::fields;

use crate::error::ApiError;
use crate::http::ApiClient;

const PATH: &str = "/plans";
const INVITE_PATH: &str = "/plans/invite";
const ACCEPT_PATH: &str = "/plans/accept";

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn list(client: &ApiClient) -> Result<Vec<ParentingPlan>, ApiError> {
    client.get_field(PATH, fields::PLANS).await
}

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn create(
    client: &ApiClient,
    payload: &CreatePlanPayload,
) -> Result<ParentingPlan, ApiError> {
    client.post_field(PATH, payload, fields::PLAN).await
}

/// Send an invite. The server records it as `pending`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn invite(
    client: &ApiClient,
    payload: &CreateInvitePayload,
) -> Result<PlanInvite, ApiError> {
    client.post_field(INVITE_PATH, payload, fields::INVITE).await
}

/// Accept an invite as the current user.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn accept(client: &ApiClient, invite_id: &str) -> Result<PlanInvite, ApiError> {
    let payload = AcceptInvitePayload {
        invite_id: invite_id.to_string(),
    };
    client.post_field(ACCEPT_PATH, &payload, fields::INVITE).await
}
