//! Session state-machine behavior at the store level: mutation ordering,
//! send preconditions, and the full compose-preview-send lifecycle.

use std::collections::HashMap;

use embedsmith_bot::audit::AuditLog;
use embedsmith_bot::commands::embed::ui;
use embedsmith_bot::interactions::ids;
use embedsmith_bot::interactions::modal_handler::embed_from_inputs;
use embedsmith_bot::store::{EmbedData, Session, SessionStore};

fn titled(title: &str) -> EmbedData {
    EmbedData {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

#[test]
fn delete_at_index_keeps_relative_order() {
    let mut session = Session {
        embeds: vec![titled("a"), titled("b"), titled("c"), titled("d")],
        ..Default::default()
    };
    session.embeds.remove(1);
    let titles: Vec<_> = session
        .embeds
        .iter()
        .map(|e| e.title.as_deref().unwrap())
        .collect();
    assert_eq!(titles, ["a", "c", "d"]);
}

#[test]
fn empty_session_has_nothing_to_send() {
    let mut session = Session::default();
    assert!(!session.has_payload());
    session.content = "Hi".to_string();
    assert!(session.has_payload());
    session.content.clear();
    session.embeds.push(EmbedData::default());
    assert!(session.has_payload());
}

#[test]
fn only_http_urls_become_attachments() {
    use embedsmith_bot::delivery::has_url_scheme;
    assert!(has_url_scheme("https://example.com/file.zip"));
    assert!(has_url_scheme("http://example.com/file.zip"));
    assert!(!has_url_scheme("ftp://example.com/file.zip"));
    assert!(!has_url_scheme("file.zip"));
    assert!(!has_url_scheme(""));
}

#[test]
fn attachment_alone_is_not_sendable() {
    let session = Session {
        attachment: "https://example.com/file.zip".to_string(),
        ..Default::default()
    };
    assert!(!session.has_payload());
}

#[test]
fn invalid_color_leaves_color_unset_but_keeps_other_inputs() {
    let inputs: HashMap<String, String> = [
        (ids::INPUT_TITLE, "Hello"),
        (ids::INPUT_DESCRIPTION, "World"),
        (ids::INPUT_COLOR, "notacolor"),
        (ids::INPUT_IMAGE, "https://example.com/pic.png"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let embed = embed_from_inputs(&inputs);
    assert_eq!(embed.title.as_deref(), Some("Hello"));
    assert_eq!(embed.description.as_deref(), Some("World"));
    assert!(embed.color.is_none());
    assert_eq!(embed.image.as_deref(), Some("https://example.com/pic.png"));
}

#[test]
fn compose_preview_send_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let sessions_path = dir.path().join("sessions.json");
    let audit_path = dir.path().join("admin-log.txt");

    let mut store = SessionStore::new(&sessions_path);
    let audit = AuditLog::new(&audit_path);
    let user_id = "42";

    // Add one embed, then set the message text.
    {
        let session = store.get_or_create(user_id);
        session.embeds.push(EmbedData {
            title: Some("Hello".to_string()),
            description: Some("World".to_string()),
            ..Default::default()
        });
        store.save_all().unwrap();
    }
    {
        let session = store.get_or_create(user_id);
        session.content = "Hi there".to_string();
        store.save_all().unwrap();
    }

    // Preview: sendable, and the summary carries the message text.
    let session = store.get(user_id).unwrap().clone();
    assert!(session.has_payload());
    let (summary, embeds, components) = ui::preview(&session);
    assert!(summary.contains("Hi there"));
    assert_eq!(embeds.len(), 1);
    assert_eq!(components.len(), 1);

    // Confirmed send: session removed, snapshot rewritten, one audit line.
    audit.record(&format!("Embed message sent by admin ({user_id}) to channel 7"));
    store.delete(user_id);
    store.save_all().unwrap();

    assert!(store.get(user_id).is_none());
    let reloaded = SessionStore::load(&sessions_path);
    assert!(reloaded.is_empty());

    let log = std::fs::read_to_string(&audit_path).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Embed message sent by admin (42)"));
}

#[test]
fn audit_line_starts_with_rfc3339_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("admin-log.txt");
    let audit = AuditLog::new(&audit_path);
    audit.record("first");
    audit.record("second");

    let log = std::fs::read_to_string(&audit_path).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let (timestamp, rest) = line.split_once(" | ").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(!rest.is_empty());
    }
}
