use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    full_name: String,
    email: String,
    role: String,
    expires_at: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = cp_client::services::auth::login(&ctx.client, &args.email, &args.password).await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            expires_at: cp_session::token_expiry(&session.token).map(|ts| ts.to_rfc3339()),
            user_id: session.user.id,
            full_name: session.user.full_name,
            email: session.user.email,
            role: session.user.role.to_string(),
        },
        flags.format,
    )
}
