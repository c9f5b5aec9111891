use cp_core::entities::Child;
use cp_core::payloads::CreateChildPayload;
use cp_core::responses::fields;

use crate::error::ApiError;
use crate::http::ApiClient;

const PATH: &str = "/children";

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn list(client: &ApiClient) -> Result<Vec<Child>, ApiError> {
    client.get_field(PATH, fields::CHILDREN).await
}

/// # Errors
///
/// Propagates any [`ApiError`] from the request helper.
pub async fn create(client: &ApiClient, payload: &CreateChildPayload) -> Result<Child, ApiError> {
    client.post_field(PATH, payload, fields::CHILD).await
}
