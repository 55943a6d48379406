//! Pure rendering helpers: selection labels, description truncation, and
//! color parsing.

use embedsmith_bot::commands::embed::ui::{embed_option_description, embed_option_label};
use embedsmith_bot::interactions::modal_handler::parse_color;
use embedsmith_bot::store::EmbedData;

#[test]
fn option_label_prefers_title() {
    let embed = EmbedData {
        title: Some("Patch notes".to_string()),
        ..Default::default()
    };
    assert_eq!(embed_option_label(&embed, 0), "Patch notes");
}

#[test]
fn option_label_defaults_to_one_based_index() {
    let embed = EmbedData::default();
    assert_eq!(embed_option_label(&embed, 0), "Embed 1");
    assert_eq!(embed_option_label(&embed, 4), "Embed 5");

    let empty_title = EmbedData {
        title: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(embed_option_label(&empty_title, 1), "Embed 2");
}

#[test]
fn option_description_truncates_at_fifty_chars() {
    let short = EmbedData {
        description: Some("short enough".to_string()),
        ..Default::default()
    };
    assert_eq!(embed_option_description(&short).unwrap(), "short enough");

    let long = EmbedData {
        description: Some("x".repeat(80)),
        ..Default::default()
    };
    let rendered = embed_option_description(&long).unwrap();
    assert_eq!(rendered.chars().count(), 51);
    assert!(rendered.ends_with('…'));

    assert!(embed_option_description(&EmbedData::default()).is_none());
}

#[test]
fn parse_color_accepts_hex_with_or_without_hash() {
    assert_eq!(parse_color("#ff0000"), Some(0xFF0000));
    assert_eq!(parse_color("2ECC71"), Some(0x2ECC71));
    assert_eq!(parse_color(" #000000 "), Some(0));
}

#[test]
fn parse_color_rejects_garbage() {
    assert_eq!(parse_color("notacolor"), None);
    assert_eq!(parse_color("#GGGGGG"), None);
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#"), None);
    assert_eq!(parse_color("1234567"), None);
}
