use cp_client::services::messages;
use cp_core::datefmt::render_timestamp;
use cp_core::entities::Message;
use cp_core::payloads::SendMessagePayload;
use cp_core::validation::require_field;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MessagesCommands;
use crate::context::AppContext;
use crate::output::{output, output_list};

pub(super) const EMPTY: &str = "No messages yet.";

#[derive(Serialize)]
pub(super) struct MessageRow {
    sent: String,
    from: String,
    content: String,
}

pub(super) fn row(message: &Message) -> MessageRow {
    let content = if message.is_deleted {
        String::from("(deleted)")
    } else if message.is_flagged {
        match &message.flagged_reason {
            Some(reason) => format!("(flagged: {reason}) {}", message.content),
            None => format!("(flagged) {}", message.content),
        }
    } else {
        message.content.clone()
    };
    MessageRow {
        sent: render_timestamp(message.created_at),
        from: message.sender_id.clone(),
        content,
    }
}

/// Handle `coparent messages`.
pub async fn handle(
    action: &MessagesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MessagesCommands::List { plan_id } => {
            let list = messages::list_by_plan(&ctx.client, plan_id).await?;
            output_list(&list, flags.format, EMPTY, row)
        }
        MessagesCommands::Send {
            plan_id,
            receiver_id,
            content,
        } => {
            let user = ctx.client.require_user()?;
            let payload = SendMessagePayload {
                sender_id: user.id,
                receiver_id: receiver_id.clone(),
                plan_id: plan_id.clone(),
                content: require_field("Message", content)?.to_string(),
            };
            let message = messages::send(&ctx.client, &payload).await?;
            output(&message, flags.format)
        }
    }
}
