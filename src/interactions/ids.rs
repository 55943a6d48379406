//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and enables future refactors.

// Main menu buttons
pub const COMPOSER_ADD_EMBED: &str = "composer_add_embed";
pub const COMPOSER_EDIT_EMBED: &str = "composer_edit_embed";
pub const COMPOSER_DELETE_EMBED: &str = "composer_delete_embed";
pub const COMPOSER_SET_CONTENT: &str = "composer_set_content";
pub const COMPOSER_PREVIEW: &str = "composer_preview";

// Preview step buttons
pub const COMPOSER_CONFIRM_SEND: &str = "composer_confirm_send";
pub const COMPOSER_BACK: &str = "composer_back";

// Select menus listing existing embeds
pub const COMPOSER_EDIT_SELECT: &str = "composer_edit_select";
pub const COMPOSER_DELETE_SELECT: &str = "composer_delete_select";

// Modals
pub const MODAL_ADD_EMBED: &str = "composer_add_modal";
pub const MODAL_CONTENT: &str = "composer_content_modal";
pub const MODAL_EDIT_PREFIX: &str = "composer_edit_modal_"; // followed by embed index

// Modal input fields
pub const INPUT_TITLE: &str = "embed_title";
pub const INPUT_DESCRIPTION: &str = "embed_description";
pub const INPUT_COLOR: &str = "embed_color";
pub const INPUT_IMAGE: &str = "embed_image";
pub const INPUT_CONTENT: &str = "message_content";
pub const INPUT_ATTACHMENT: &str = "message_attachment";

/// Every component and modal owned by the composer carries this prefix, so
/// the top-level handler can route by family.
pub fn is_composer_id(id: &str) -> bool {
    id.starts_with("composer_")
}

/// Builds the custom_id of the edit modal for the embed at `index`.
pub fn edit_modal_id(index: usize) -> String {
    format!("{MODAL_EDIT_PREFIX}{index}")
}

/// Parses an edit-modal custom_id back into its embed index.
/// Expected form: `composer_edit_modal_<index>`.
pub fn parse_edit_modal_id(id: &str) -> Option<usize> {
    id.strip_prefix(MODAL_EDIT_PREFIX)?.parse().ok()
}
