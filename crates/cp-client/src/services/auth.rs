//! Login, registration, and logout.

use cp_core::responses::AuthResponse;
use cp_core::validation::{validate_login, validate_registration};
use cp_session::Session;

use crate::error::ApiError;
use crate::http::{ApiClient, RequestOptions};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/users/register";

/// Exchange credentials for a session and store it.
///
/// A rejected login leaves any existing session untouched.
///
/// # Errors
///
/// - `ApiError::Core` when a field is blank (no request is sent)
/// - `ApiError::LoginFailed` when the server rejects the credentials
/// - `ApiError::Session` when the session cannot be stored
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    let request = validate_login(email, password)?;
    let options = RequestOptions::post(&request)?.anonymous();

    let body = match client.request(LOGIN_PATH, options).await {
        Ok(body) => body,
        Err(ApiError::Http { status, message }) => {
            tracing::debug!(status, detail = %message, "login rejected");
            return Err(ApiError::LoginFailed {
                status,
                detail: message,
            });
        }
        Err(other) => return Err(other),
    };

    let resp: AuthResponse = serde_json::from_value(body).map_err(|e| ApiError::Decode {
        path: LOGIN_PATH.to_string(),
        reason: e.to_string(),
    })?;

    let session = Session {
        token: resp.token,
        user: resp.user,
    };
    client.session().save(&session)?;
    tracing::info!(user_id = %session.user.id, "logged in");
    Ok(session)
}

/// Create an account. Does not log in.
///
/// `role` is checked against the known roles before any request is sent.
///
/// # Errors
///
/// - `ApiError::Core` when the form is invalid (no request is sent)
/// - `ApiError::RegistrationFailed` when the server rejects the registration
pub async fn register(
    client: &ApiClient,
    full_name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<AuthResponse, ApiError> {
    let request = validate_registration(full_name, email, password, role)?;
    let options = RequestOptions::post(&request)?.anonymous();

    let body = match client.request(REGISTER_PATH, options).await {
        Ok(body) => body,
        Err(ApiError::Http { status, message }) => {
            tracing::debug!(status, detail = %message, "registration rejected");
            return Err(ApiError::RegistrationFailed {
                status,
                detail: message,
            });
        }
        Err(other) => return Err(other),
    };

    serde_json::from_value(body).map_err(|e| ApiError::Decode {
        path: REGISTER_PATH.to_string(),
        reason: e.to_string(),
    })
}

/// Forget the stored session.
///
/// # Errors
///
/// Returns `ApiError::Session` if the stored keys cannot be removed.
pub fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.session().clear()?;
    Ok(())
}
