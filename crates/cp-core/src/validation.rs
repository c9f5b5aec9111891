//! Client-side form checks run before any request is sent.

use crate::enums::Role;
use crate::errors::CoreError;
use crate::payloads::{LoginRequest, RegisterRequest};

const MIN_FULL_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

/// Shape check for an email address: `local@domain.tld`, no whitespace, one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Validate the registration form and build the request body.
///
/// Name and email are trimmed; the password is kept verbatim.
///
/// # Errors
///
/// Returns `CoreError::Validation` with the first failing rule's message.
pub fn validate_registration(
    full_name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<RegisterRequest, CoreError> {
    let full_name = full_name.trim();
    let email = email.trim();

    if full_name.chars().count() < MIN_FULL_NAME_CHARS {
        return Err(CoreError::Validation(
            "Full name must be at least 2 characters.".into(),
        ));
    }
    if !is_valid_email(email) {
        return Err(CoreError::Validation(
            "Please enter a valid email address.".into(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(CoreError::Validation(
            "Password must be at least 6 characters long.".into(),
        ));
    }
    let role: Role = role.parse()?;

    Ok(RegisterRequest {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    })
}

/// Validate the login form and build the request body.
///
/// # Errors
///
/// Returns `CoreError::Validation` when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, CoreError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Please enter email and password.".into(),
        ));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Reject a blank required form field.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the field.
pub fn require_field<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required.")));
    }
    Ok(trimmed)
}
