//! Central UI style constants and helpers.

pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_ADD: &str = "➕";
pub const EMOJI_EDIT: &str = "✏️";
pub const EMOJI_DELETE: &str = "🗑";
pub const EMOJI_TEXT: &str = "📝";
pub const EMOJI_SEND: &str = "📤";
pub const EMOJI_CONFIRM: &str = "✅";
pub const EMOJI_BACK: &str = "🔙";

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
