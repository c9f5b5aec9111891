use base64::Engine as _;
use chrono::{DateTime, Utc};

/// Decode a JWT `exp` claim without verifying the signature.
///
/// Returns `None` for opaque (non-JWT) tokens or when `exp` is missing.
#[must_use]
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_sig), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let value: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(value["exp"].as_i64()?, 0)
}

/// Whether the token's `exp` (if any) is at or before `now`.
#[must_use]
pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    token_expiry(token).is_some_and(|exp| exp <= now)
}
