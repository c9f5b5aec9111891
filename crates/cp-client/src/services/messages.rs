use cp_core::entities::Message;
use cp_core::payloads::SendMessagePayload;
use cp_core::responses::fields;

use crate::error::ApiError;
use crate::http::{ApiClient, segment};

/// The plan's shared thread, in server order.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn list_by_plan(client: &ApiClient, plan_id: &str) -> Result<Vec<Message>, ApiError> {
    let path = format!("/messages/plan/{}", segment(plan_id));
    client.get_field(&path, fields::MESSAGES).await
}

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn send(client: &ApiClient, payload: &SendMessagePayload) -> Result<Message, ApiError> {
    client.post_field("/messages", payload, fields::MESSAGE).await
}
