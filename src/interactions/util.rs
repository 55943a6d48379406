//! Shared interaction response helpers.

use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{ComponentInteraction, Interaction, ModalInteraction};
use serenity::prelude::Context;

/// Ephemeral plain-text reply to a component interaction.
pub async fn reply_ephemeral(
    ctx: &Context,
    component: &ComponentInteraction,
    text: impl Into<String>,
) -> serenity::Result<()> {
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(text)
                    .ephemeral(true),
            ),
        )
        .await
}

/// Ephemeral plain-text reply to a modal submission.
pub async fn reply_modal_ephemeral(
    ctx: &Context,
    modal: &ModalInteraction,
    text: impl Into<String>,
) -> serenity::Result<()> {
    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(text)
                    .ephemeral(true),
            ),
        )
        .await
}

/// Generic visible error for an interaction that failed mid-handling. If the
/// interaction was already acknowledged the second response is rejected by
/// Discord; that rejection is logged at debug and swallowed.
pub async fn notify_failure(ctx: &Context, interaction: &Interaction) {
    let message = CreateInteractionResponseMessage::new()
        .content("❌ Something went wrong while handling that action.")
        .ephemeral(true);
    let response = CreateInteractionResponse::Message(message);
    let result = match interaction {
        Interaction::Command(command) => command.create_response(&ctx.http, response).await,
        Interaction::Component(component) => component.create_response(&ctx.http, response).await,
        Interaction::Modal(modal) => modal.create_response(&ctx.http, response).await,
        _ => return,
    };
    if let Err(e) = result {
        tracing::debug!(target: "ui.notify", error = ?e, "failure notice rejected (already acknowledged?)");
    }
}
