//! Handles modal submissions: new embeds, embed edits, and the message-text
//! form.

use std::collections::HashMap;

use anyhow::Result;
use serenity::model::application::{ActionRowComponent, ModalInteraction};
use serenity::prelude::Context;
use tracing::instrument;

use super::ids;
use super::util::reply_modal_ephemeral;
use crate::store::EmbedData;
use crate::AppState;

/// The three forms the composer can show, resolved from the modal's
/// custom id. Edit carries the index of the embed being replaced.
enum ModalTarget {
    AddEmbed,
    Content,
    EditEmbed(usize),
}

impl ModalTarget {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            ids::MODAL_ADD_EMBED => Some(Self::AddEmbed),
            ids::MODAL_CONTENT => Some(Self::Content),
            _ => ids::parse_edit_modal_id(id).map(Self::EditEmbed),
        }
    }
}

#[instrument(level = "info", skip(ctx, modal, app_state), fields(user_id = modal.user.id.get(), custom_id = %modal.data.custom_id))]
pub async fn handle(ctx: &Context, modal: &ModalInteraction, app_state: &AppState) -> Result<()> {
    let Some(target) = ModalTarget::from_id(&modal.data.custom_id) else {
        return Ok(());
    };
    let user_id = modal.user.id.to_string();
    let inputs = collect_inputs(modal);

    match target {
        ModalTarget::AddEmbed => {
            let embed = embed_from_inputs(&inputs);
            let count = {
                let mut store = app_state.sessions.write().await;
                let session = store.get_or_create(&user_id);
                session.embeds.push(embed);
                let count = session.embeds.len();
                store.save_all()?;
                count
            };
            reply_modal_ephemeral(ctx, modal, format!("✅ Embed added. Total embeds: {count}"))
                .await?;
        }
        ModalTarget::Content => {
            {
                let mut store = app_state.sessions.write().await;
                let session = store.get_or_create(&user_id);
                session.content = inputs.get(ids::INPUT_CONTENT).cloned().unwrap_or_default();
                session.attachment = inputs
                    .get(ids::INPUT_ATTACHMENT)
                    .cloned()
                    .unwrap_or_default();
                store.save_all()?;
            }
            reply_modal_ephemeral(ctx, modal, "✅ Message text updated.").await?;
        }
        ModalTarget::EditEmbed(index) => {
            let embed = embed_from_inputs(&inputs);
            let replaced = {
                let mut store = app_state.sessions.write().await;
                let session = store.get_or_create(&user_id);
                match session.embeds.get_mut(index) {
                    Some(slot) => {
                        *slot = embed;
                        store.save_all()?;
                        true
                    }
                    None => false,
                }
            };
            if replaced {
                reply_modal_ephemeral(ctx, modal, format!("✅ Embed {} updated.", index + 1))
                    .await?;
            } else {
                reply_modal_ephemeral(ctx, modal, "❌ That embed no longer exists.").await?;
            }
        }
    }
    Ok(())
}

/// Builds an embed from the form's inputs. Empty inputs leave the part unset;
/// an unparseable color is dropped while the other parts still apply.
pub fn embed_from_inputs(inputs: &HashMap<String, String>) -> EmbedData {
    let non_empty = |key: &str| inputs.get(key).filter(|v| !v.is_empty()).cloned();
    EmbedData {
        title: non_empty(ids::INPUT_TITLE),
        description: non_empty(ids::INPUT_DESCRIPTION),
        color: non_empty(ids::INPUT_COLOR).and_then(|raw| parse_color(&raw)),
        image: non_empty(ids::INPUT_IMAGE),
        fields: Vec::new(),
    }
}

/// Parses a hex color such as `#ff0000` or `ff0000` into its RGB integer.
pub fn parse_color(input: &str) -> Option<u32> {
    let digits = input.trim().trim_start_matches('#');
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn collect_inputs(modal: &ModalInteraction) -> HashMap<String, String> {
    let mut inputs = HashMap::new();
    for row in &modal.data.components {
        for component in &row.components {
            if let ActionRowComponent::InputText(input) = component {
                inputs.insert(
                    input.custom_id.clone(),
                    input.value.clone().unwrap_or_default(),
                );
            }
        }
    }
    inputs
}
