use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),

    #[error("session encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("home directory not found; cannot store the session")]
    NoHomeDir,
}
