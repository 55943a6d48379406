//! Sends a composed session into a channel through a webhook.

use serenity::builder::{CreateAttachment, CreateWebhook, ExecuteWebhook};
use serenity::model::id::ChannelId;
use serenity::model::webhook::Webhook;
use serenity::prelude::Context;

use crate::commands::embed::ui::embed_from_data;
use crate::store::Session;

pub const WEBHOOK_NAME: &str = "Embed Bot Webhook";

/// Finds a webhook in the channel whose token is usable by the bot, creating
/// one when none exists. Returns the webhook and whether it was just created
/// so the caller can audit the creation.
pub async fn resolve_webhook(
    ctx: &Context,
    channel_id: ChannelId,
) -> serenity::Result<(Webhook, bool)> {
    let webhooks = channel_id.webhooks(&ctx.http).await?;
    if let Some(webhook) = webhooks.into_iter().find(|w| w.token.is_some()) {
        return Ok((webhook, false));
    }
    let webhook = channel_id
        .create_webhook(&ctx.http, CreateWebhook::new(WEBHOOK_NAME))
        .await?;
    Ok((webhook, true))
}

/// Executes the webhook once with the session's text, embeds, and attachment.
/// No retry on failure; the caller reports the error to the user.
pub async fn send_session(
    ctx: &Context,
    webhook: &Webhook,
    session: &Session,
) -> serenity::Result<()> {
    let mut builder =
        ExecuteWebhook::new().embeds(session.embeds.iter().map(embed_from_data).collect());
    if !session.content.is_empty() {
        builder = builder.content(&session.content);
    }
    if has_url_scheme(&session.attachment) {
        let file = CreateAttachment::url(&ctx.http, &session.attachment).await?;
        builder = builder.add_file(file);
    }
    webhook.execute(&ctx.http, false, builder).await?;
    Ok(())
}

/// Only http(s) URLs become file attachments; anything else stays a plain
/// string on the session and is ignored at send time.
pub fn has_url_scheme(attachment: &str) -> bool {
    attachment.starts_with("http://") || attachment.starts_with("https://")
}
