use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    user_id: String,
    email: String,
    role: String,
    next: &'static str,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let created = cp_client::services::auth::register(
        &ctx.client,
        &args.full_name,
        &args.email,
        &args.password,
        &args.role,
    )
    .await?;

    output(
        &AuthRegisterResponse {
            registered: true,
            user_id: created.user.id,
            email: created.user.email,
            role: created.user.role.to_string(),
            next: "Registration successful! Please log in with `coparent auth login`.",
        },
        flags.format,
    )
}
