//! The plan-invitation workflow.
//!
//! ```text
//! plan exists → invite sent (pending) → invite accepted (accepted)
//! ```
//!
//! Both steps are single requests followed by a local patch of the
//! [`PlanBoard`]. The server stays authoritative; the client only refuses
//! requests it can already tell are wrong.

use cp_core::CoreError;
use cp_core::entities::PlanInvite;
use cp_core::enums::InviteStatus;
use cp_core::payloads::CreateInvitePayload;
use cp_core::validation::is_valid_email;

use crate::board::PlanBoard;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::services::plans;

/// Invite `email` to `plan_id` and record the pending invite on the board.
///
/// # Errors
///
/// - `ApiError::Core` when `email` is not an email address (no request is sent)
/// - any [`ApiError`] from the request helper
pub async fn send_invite(
    client: &ApiClient,
    board: &mut PlanBoard,
    plan_id: &str,
    email: &str,
) -> Result<PlanInvite, ApiError> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(CoreError::Validation("Please enter a valid email address.".into()).into());
    }

    let invite = plans::invite(
        client,
        &CreateInvitePayload {
            plan_id: plan_id.to_string(),
            email: email.to_string(),
        },
    )
    .await?;

    if !board.record_invite(invite.clone()) {
        tracing::debug!(plan_id, invite_id = %invite.id, "invited plan is not on the board");
    }
    Ok(invite)
}

/// Accept `invite_id` as the logged-in user and patch the board.
///
/// When the invite is on the board it must still be pending and addressed to
/// the session user's email. Invites the board has never seen are left to
/// the server to judge.
///
/// # Errors
///
/// - `ApiError::NotLoggedIn` without a session
/// - `ApiError::Core` (`InvalidTransition`) for an invite that is already accepted
/// - `ApiError::InviteEmailMismatch` when the invite is addressed to someone else
/// - any [`ApiError`] from the request helper
pub async fn accept_invite(
    client: &ApiClient,
    board: &mut PlanBoard,
    invite_id: &str,
) -> Result<PlanInvite, ApiError> {
    let user = client.require_user()?;

    if let Some(known) = board.find_invite(invite_id) {
        if !known.status.can_transition_to(InviteStatus::Accepted) {
            return Err(CoreError::InvalidTransition {
                entity_type: "invite".into(),
                id: known.id.clone(),
                from: known.status.to_string(),
                to: InviteStatus::Accepted.to_string(),
            }
            .into());
        }
        if !user.has_email(&known.email) {
            return Err(ApiError::InviteEmailMismatch {
                invite_id: known.id.clone(),
                invited: known.email.clone(),
                current: user.email,
            });
        }
    } else {
        tracing::debug!(invite_id, "accepting an invite not on the board");
    }

    let accepted = plans::accept(client, invite_id).await?;
    board.mark_accepted(accepted.clone());
    tracing::info!(invite_id, plan_id = %accepted.plan_id, "invite accepted");
    Ok(accepted)
}
