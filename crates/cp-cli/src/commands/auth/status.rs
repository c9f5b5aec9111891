use chrono::{DateTime, Utc};
use cp_core::entities::User;
use cp_session::TokenSource;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    full_name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    token_source: Option<TokenSource>,
    expires_at: Option<String>,
    expired: Option<bool>,
    api: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = ctx.session.token();
    let status = build_status(
        ctx.session.user(),
        token.as_deref(),
        ctx.session.token_source(),
        ctx.config.api.base_url(),
        Utc::now(),
    );
    output(&status, flags.format)
}

/// `expires_at`/`expired` stay `None` for opaque tokens without an `exp` claim.
fn build_status(
    user: Option<User>,
    token: Option<&str>,
    token_source: Option<TokenSource>,
    api: &str,
    now: DateTime<Utc>,
) -> AuthStatusResponse {
    let expires_at = token.and_then(cp_session::token_expiry);
    AuthStatusResponse {
        authenticated: user.is_some() && token.is_some(),
        user_id: user.as_ref().map(|u| u.id.clone()),
        full_name: user.as_ref().map(|u| u.full_name.clone()),
        email: user.as_ref().map(|u| u.email.clone()),
        role: user.as_ref().map(|u| u.role.to_string()),
        token_source,
        expires_at: expires_at.map(|ts| ts.to_rfc3339()),
        expired: expires_at.map(|ts| ts <= now),
        api: api.to_string(),
    }
}
