//! Cross-cutting error types for Coparent.
//!
//! Transport and storage errors live in their own crates (`ApiError`,
//! `SessionError`). They converge into `anyhow` in `cp-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Form input failed a client-side check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },
}
