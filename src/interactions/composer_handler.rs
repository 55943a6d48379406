//! Handles the composer's button and select-menu interactions: the menu
//! actions, the edit/delete selection lists, and the preview/send step.

use anyhow::Result;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{ComponentInteraction, ComponentInteractionDataKind};
use serenity::prelude::Context;
use tracing::instrument;

use super::ids;
use super::util::reply_ephemeral;
use crate::commands::embed::ui;
use crate::ui::style::error_embed;
use crate::{delivery, AppState};

/// The composer's fixed action set. Mapping custom ids into a variant up
/// front keeps the dispatch exhaustive instead of a fallthrough switch.
enum ComposerAction {
    AddEmbed,
    EditEmbed,
    DeleteEmbed,
    SetContent,
    Preview,
    ConfirmSend,
    Back,
    EditSelect,
    DeleteSelect,
}

impl ComposerAction {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            ids::COMPOSER_ADD_EMBED => Some(Self::AddEmbed),
            ids::COMPOSER_EDIT_EMBED => Some(Self::EditEmbed),
            ids::COMPOSER_DELETE_EMBED => Some(Self::DeleteEmbed),
            ids::COMPOSER_SET_CONTENT => Some(Self::SetContent),
            ids::COMPOSER_PREVIEW => Some(Self::Preview),
            ids::COMPOSER_CONFIRM_SEND => Some(Self::ConfirmSend),
            ids::COMPOSER_BACK => Some(Self::Back),
            ids::COMPOSER_EDIT_SELECT => Some(Self::EditSelect),
            ids::COMPOSER_DELETE_SELECT => Some(Self::DeleteSelect),
            _ => None,
        }
    }
}

#[instrument(level = "info", skip(ctx, component, app_state), fields(user_id = component.user.id.get(), custom_id = %component.data.custom_id))]
pub async fn handle(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
) -> Result<()> {
    let Some(action) = ComposerAction::from_id(&component.data.custom_id) else {
        return Ok(());
    };
    let user_id = component.user.id.to_string();
    match action {
        ComposerAction::AddEmbed => {
            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Modal(ui::add_embed_modal()),
                )
                .await?;
        }
        ComposerAction::SetContent => {
            let session = {
                let mut store = app_state.sessions.write().await;
                store.get_or_create(&user_id).clone()
            };
            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Modal(ui::content_modal(&session)),
                )
                .await?;
        }
        ComposerAction::EditEmbed => {
            selection_list(ctx, component, app_state, ids::COMPOSER_EDIT_SELECT, &user_id).await?;
        }
        ComposerAction::DeleteEmbed => {
            selection_list(ctx, component, app_state, ids::COMPOSER_DELETE_SELECT, &user_id)
                .await?;
        }
        ComposerAction::EditSelect => {
            let Some(index) = selected_index(component) else {
                return Ok(());
            };
            let embed = {
                let store = app_state.sessions.read().await;
                store.get(&user_id).and_then(|s| s.embeds.get(index)).cloned()
            };
            match embed {
                Some(embed) => {
                    component
                        .create_response(
                            &ctx.http,
                            CreateInteractionResponse::Modal(ui::edit_embed_modal(index, &embed)),
                        )
                        .await?;
                }
                None => {
                    reply_ephemeral(ctx, component, "❌ That embed no longer exists.").await?;
                }
            }
        }
        ComposerAction::DeleteSelect => {
            delete_selected(ctx, component, app_state, &user_id).await?;
        }
        ComposerAction::Preview => {
            let session = {
                let mut store = app_state.sessions.write().await;
                store.get_or_create(&user_id).clone()
            };
            if !session.has_payload() {
                reply_ephemeral(
                    ctx,
                    component,
                    "❌ Nothing to send. Create at least one embed or add message text.",
                )
                .await?;
                return Ok(());
            }
            let (content, embeds, components) = ui::preview(&session);
            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(content)
                            .embeds(embeds)
                            .components(components)
                            .ephemeral(true),
                    ),
                )
                .await?;
        }
        ComposerAction::ConfirmSend => {
            confirm_send(ctx, component, app_state, &user_id).await?;
        }
        ComposerAction::Back => {
            let embed_count = {
                let store = app_state.sessions.read().await;
                store.get(&user_id).map_or(0, |s| s.embeds.len())
            };
            let (content, components) = ui::main_menu(embed_count);
            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::UpdateMessage(
                        CreateInteractionResponseMessage::new()
                            .content(content)
                            .embeds(vec![])
                            .components(components),
                    ),
                )
                .await?;
        }
    }
    Ok(())
}

/// Replies with a select menu over the session's embeds, or a notice when
/// there is nothing to pick from.
async fn selection_list(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    select_id: &str,
    user_id: &str,
) -> Result<()> {
    let embeds = {
        let store = app_state.sessions.read().await;
        store.get(user_id).map(|s| s.embeds.clone()).unwrap_or_default()
    };
    if embeds.is_empty() {
        reply_ephemeral(ctx, component, "❌ There are no embeds yet.").await?;
        return Ok(());
    }
    let verb = if select_id == ids::COMPOSER_DELETE_SELECT {
        "delete"
    } else {
        "edit"
    };
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(format!("Select the embed to {verb}:"))
                    .components(vec![ui::embed_selection_row(select_id, &embeds)])
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

async fn delete_selected(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    user_id: &str,
) -> Result<()> {
    let Some(index) = selected_index(component) else {
        return Ok(());
    };
    let remaining = {
        let mut store = app_state.sessions.write().await;
        let session = store.get_or_create(user_id);
        if index >= session.embeds.len() {
            None
        } else {
            session.embeds.remove(index);
            let remaining = session.embeds.len();
            store.save_all()?;
            Some(remaining)
        }
    };
    let Some(remaining) = remaining else {
        reply_ephemeral(ctx, component, "❌ That embed no longer exists.").await?;
        return Ok(());
    };
    let (content, components) = ui::main_menu(remaining);
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content(format!("🗑 Embed removed.\n\n{content}"))
                    .components(components),
            ),
        )
        .await?;
    Ok(())
}

async fn confirm_send(
    ctx: &Context,
    component: &ComponentInteraction,
    app_state: &AppState,
    user_id: &str,
) -> Result<()> {
    let session = {
        let store = app_state.sessions.read().await;
        store.get(user_id).cloned()
    };
    let Some(session) = session else {
        reply_ephemeral(ctx, component, "❌ Your session has expired. Run /embed again.").await?;
        return Ok(());
    };

    // Platform failures here are reported in place rather than bubbled to the
    // generic boundary: the session must stay intact for another attempt.
    let delivered = async {
        let (webhook, created) = delivery::resolve_webhook(ctx, component.channel_id).await?;
        if created {
            app_state.audit.record(&format!(
                "Created webhook \"{}\" in channel {}",
                delivery::WEBHOOK_NAME,
                component.channel_id
            ));
        }
        delivery::send_session(ctx, &webhook, &session).await
    }
    .await;

    if let Err(e) = delivered {
        tracing::error!(target: "delivery", user_id = %user_id, error = ?e, "webhook send failed");
        component
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .embed(error_embed(
                            "Delivery failed",
                            "The webhook send did not go through. Your draft is untouched.",
                        ))
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    }

    {
        let mut store = app_state.sessions.write().await;
        store.delete(user_id);
        store.save_all()?;
    }
    app_state.audit.record(&format!(
        "Embed message sent by {} ({}) to channel {}",
        component.user.name, component.user.id, component.channel_id
    ));

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content("✅ Message sent successfully!")
                    .embeds(vec![])
                    .components(vec![]),
            ),
        )
        .await?;
    Ok(())
}

fn selected_index(component: &ComponentInteraction) -> Option<usize> {
    if let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind {
        values.first()?.parse().ok()
    } else {
        None
    }
}
