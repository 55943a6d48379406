//! Handles the UI creation for the `/embed` composer: menus, modals,
//! selection lists, and the preview.

use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInputText, CreateModal, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption,
};
use serenity::model::application::InputTextStyle;

use crate::interactions::ids;
use crate::store::{EmbedData, Session};
use crate::ui::style::{
    EMOJI_ADD, EMOJI_BACK, EMOJI_CONFIRM, EMOJI_DELETE, EMOJI_EDIT, EMOJI_SEND, EMOJI_TEXT,
};
use crate::ui::Btn;

const SELECT_DESCRIPTION_LIMIT: usize = 50;

/// The main menu: a status line plus one row of the five composer actions.
pub fn main_menu(embed_count: usize) -> (String, Vec<CreateActionRow>) {
    let content = format!("🔧 **Embed message builder**\n📊 Embeds created: {embed_count}");
    let row = CreateActionRow::Buttons(vec![
        Btn::primary(ids::COMPOSER_ADD_EMBED, &format!("{EMOJI_ADD} Add embed")),
        Btn::secondary(ids::COMPOSER_EDIT_EMBED, &format!("{EMOJI_EDIT} Edit embed")),
        Btn::danger(
            ids::COMPOSER_DELETE_EMBED,
            &format!("{EMOJI_DELETE} Delete embed"),
        ),
        Btn::secondary(ids::COMPOSER_SET_CONTENT, &format!("{EMOJI_TEXT} Message text")),
        Btn::success(ids::COMPOSER_PREVIEW, &format!("{EMOJI_SEND} Preview & send")),
    ]);
    (content, vec![row])
}

/// Read-only preview of the composed message with Confirm/Back buttons.
pub fn preview(session: &Session) -> (String, Vec<CreateEmbed>, Vec<CreateActionRow>) {
    let content_line = if session.content.is_empty() {
        "_not set_".to_string()
    } else {
        session.content.clone()
    };
    let attachment_line = if session.attachment.is_empty() {
        "_not set_".to_string()
    } else {
        session.attachment.clone()
    };
    let content = format!(
        "📦 **Message preview**\n📝 Text: {content_line}\n🖼 Attachment: {attachment_line}\n📊 Embeds: {}",
        session.embeds.len()
    );
    let embeds = session.embeds.iter().map(embed_from_data).collect();
    let row = CreateActionRow::Buttons(vec![
        Btn::success(ids::COMPOSER_CONFIRM_SEND, &format!("{EMOJI_CONFIRM} Send")),
        Btn::secondary(ids::COMPOSER_BACK, &format!("{EMOJI_BACK} Back to menu")),
    ]);
    (content, embeds, vec![row])
}

/// One select-menu row listing every embed in the session, values carrying
/// the embed's index.
pub fn embed_selection_row(custom_id: &str, embeds: &[EmbedData]) -> CreateActionRow {
    let options = embeds
        .iter()
        .enumerate()
        .map(|(index, embed)| {
            let mut option =
                CreateSelectMenuOption::new(embed_option_label(embed, index), index.to_string());
            if let Some(description) = embed_option_description(embed) {
                option = option.description(description);
            }
            option
        })
        .collect();
    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(custom_id, CreateSelectMenuKind::String { options })
            .placeholder("Choose an embed"),
    )
}

/// Label for an embed in a selection list: its title, or `Embed N` (1-based)
/// when untitled.
pub fn embed_option_label(embed: &EmbedData, index: usize) -> String {
    match embed.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("Embed {}", index + 1),
    }
}

/// Option description: the embed description truncated to 50 characters with
/// an ellipsis, or nothing when unset.
pub fn embed_option_description(embed: &EmbedData) -> Option<String> {
    let description = embed.description.as_deref()?;
    if description.is_empty() {
        return None;
    }
    if description.chars().count() <= SELECT_DESCRIPTION_LIMIT {
        return Some(description.to_string());
    }
    let truncated: String = description.chars().take(SELECT_DESCRIPTION_LIMIT).collect();
    Some(format!("{truncated}…"))
}

/// The four optional inputs of a fresh add-embed form.
pub fn add_embed_modal() -> CreateModal {
    CreateModal::new(ids::MODAL_ADD_EMBED, "New embed").components(embed_inputs(None))
}

/// Same form as `add_embed_modal`, pre-filled with the embed being edited.
/// The modal id carries the embed's index so the submission can replace it.
pub fn edit_embed_modal(index: usize, embed: &EmbedData) -> CreateModal {
    CreateModal::new(ids::edit_modal_id(index), format!("Edit embed {}", index + 1))
        .components(embed_inputs(Some(embed)))
}

fn embed_inputs(prefill: Option<&EmbedData>) -> Vec<CreateActionRow> {
    let mut title = CreateInputText::new(InputTextStyle::Short, "Title", ids::INPUT_TITLE)
        .required(false);
    let mut description =
        CreateInputText::new(InputTextStyle::Paragraph, "Description", ids::INPUT_DESCRIPTION)
            .required(false);
    let mut color =
        CreateInputText::new(InputTextStyle::Short, "Color (hex, e.g. #ff0000)", ids::INPUT_COLOR)
            .required(false);
    let mut image = CreateInputText::new(InputTextStyle::Short, "Image URL", ids::INPUT_IMAGE)
        .required(false);
    if let Some(embed) = prefill {
        if let Some(value) = &embed.title {
            title = title.value(value);
        }
        if let Some(value) = &embed.description {
            description = description.value(value);
        }
        if let Some(value) = embed.color {
            color = color.value(format!("#{value:06X}"));
        }
        if let Some(value) = &embed.image {
            image = image.value(value);
        }
    }
    vec![
        CreateActionRow::InputText(title),
        CreateActionRow::InputText(description),
        CreateActionRow::InputText(color),
        CreateActionRow::InputText(image),
    ]
}

/// Message text and attachment URL, pre-filled from the current session.
pub fn content_modal(session: &Session) -> CreateModal {
    let mut content =
        CreateInputText::new(InputTextStyle::Paragraph, "Message text", ids::INPUT_CONTENT)
            .required(false);
    let mut attachment =
        CreateInputText::new(InputTextStyle::Short, "Attachment URL", ids::INPUT_ATTACHMENT)
            .required(false);
    if !session.content.is_empty() {
        content = content.value(&session.content);
    }
    if !session.attachment.is_empty() {
        attachment = attachment.value(&session.attachment);
    }
    CreateModal::new(ids::MODAL_CONTENT, "Message text").components(vec![
        CreateActionRow::InputText(content),
        CreateActionRow::InputText(attachment),
    ])
}

/// Converts the plain-data embed into the outbound builder form.
pub fn embed_from_data(data: &EmbedData) -> CreateEmbed {
    let mut embed = CreateEmbed::new();
    if let Some(title) = &data.title {
        embed = embed.title(title);
    }
    if let Some(description) = &data.description {
        embed = embed.description(description);
    }
    if let Some(color) = data.color {
        embed = embed.color(color);
    }
    if let Some(image) = &data.image {
        embed = embed.image(image);
    }
    for field in &data.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    embed
}
