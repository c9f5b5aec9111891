use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct HomeResponse {
    welcome: &'static str,
    about: &'static str,
    signed_in_as: Option<String>,
    next: &'static str,
}

/// Handle `coparent home`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.session.user();
    let next = if user.is_some() {
        "coparent dashboard"
    } else {
        "coparent auth login <email> <password>"
    };

    output(
        &HomeResponse {
            welcome: "Welcome to Coparent",
            about: "Manage visits, messages, and journals easily.",
            signed_in_as: user.map(|u| format!("{} <{}>", u.full_name, u.email)),
            next,
        },
        flags.format,
    )
}
