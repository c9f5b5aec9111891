use cp_core::entities::Visit;
use cp_core::payloads::CreateVisitPayload;
use cp_core::responses::fields;

use crate::error::ApiError;
use crate::http::{ApiClient, segment};

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn list_by_plan(client: &ApiClient, plan_id: &str) -> Result<Vec<Visit>, ApiError> {
    let path = format!("/visits/plan/{}", segment(plan_id));
    client.get_field(&path, fields::VISITS).await
}

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn create(client: &ApiClient, payload: &CreateVisitPayload) -> Result<Visit, ApiError> {
    client.post_field("/visits", payload, fields::VISIT).await
}
