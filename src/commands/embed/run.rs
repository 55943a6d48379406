//! Implements the run logic for the `/embed` command.

use anyhow::Result;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

use super::ui;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("embed").description("Compose and send an embed message through a webhook")
}

pub async fn run_slash(
    ctx: &Context,
    interaction: &CommandInteraction,
    app_state: &AppState,
) -> Result<()> {
    // Permission gate comes first: a non-administrator invocation must not
    // create or touch a session.
    let is_admin = interaction
        .member
        .as_deref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());
    if !is_admin {
        interaction
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content("❌ Only administrators can use this command.")
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    }

    let embed_count = {
        let mut store = app_state.sessions.write().await;
        store
            .get_or_create(&interaction.user.id.to_string())
            .embeds
            .len()
    };

    let (content, components) = ui::main_menu(embed_count);
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .components(components)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}
