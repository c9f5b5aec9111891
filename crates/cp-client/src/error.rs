use cp_core::CoreError;
use cp_session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response. `message` is the response body, or the status text
    /// when the body is empty.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose body is not the expected JSON.
    #[error("invalid response from {path}: {reason}")]
    Decode { path: String, reason: String },

    /// 2xx response whose envelope lacks the named payload field.
    #[error("response from {path} is missing the '{field}' field")]
    MissingField { path: String, field: &'static str },

    #[error("invalid request header '{0}'")]
    InvalidHeader(String),

    #[error("Login failed")]
    LoginFailed { status: u16, detail: String },

    #[error("Registration failed")]
    RegistrationFailed { status: u16, detail: String },

    #[error("not logged in; run `coparent auth login`")]
    NotLoggedIn,

    #[error("invite {invite_id} was sent to {invited}, but you are signed in as {current}")]
    InviteEmailMismatch {
        invite_id: String,
        invited: String,
        current: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status for server rejections, `None` for everything else.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. }
            | Self::LoginFailed { status, .. }
            | Self::RegistrationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
