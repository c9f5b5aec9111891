use cp_core::entities::JournalEntry;
use cp_core::payloads::CreateJournalPayload;
use cp_core::responses::fields;

use crate::error::ApiError;
use crate::http::{ApiClient, segment};

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn list_by_child(
    client: &ApiClient,
    child_id: &str,
) -> Result<Vec<JournalEntry>, ApiError> {
    let path = format!("/journal/child/{}", segment(child_id));
    client.get_field(&path, fields::ENTRIES).await
}

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn create(
    client: &ApiClient,
    payload: &CreateJournalPayload,
) -> Result<JournalEntry, ApiError> {
    client.post_field("/journal", payload, fields::ENTRY).await
}
