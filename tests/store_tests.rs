//! Snapshot persistence behavior: wholesale rewrite, lossy field
//! sanitization on reload, and resilience to missing or corrupt files.

use embedsmith_bot::store::{EmbedData, EmbedField, Session, SessionStore};

fn sample_embed() -> EmbedData {
    EmbedData {
        title: Some("Release notes".to_string()),
        description: Some("Everything that changed this week.".to_string()),
        color: Some(0x5865F2),
        image: Some("https://example.com/banner.png".to_string()),
        fields: Vec::new(),
    }
}

#[test]
fn save_then_load_preserves_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");

    let mut store = SessionStore::new(&path);
    let session = store.get_or_create("100");
    session.embeds.push(sample_embed());
    session.content = "Hi there".to_string();
    session.attachment = "https://example.com/file.zip".to_string();
    store.save_all().unwrap();

    let restored = SessionStore::load(&path);
    let session = restored.get("100").unwrap();
    assert_eq!(session.content, "Hi there");
    assert_eq!(session.attachment, "https://example.com/file.zip");
    assert_eq!(session.embeds, vec![sample_embed()]);
}

#[test]
fn reload_drops_fields_with_empty_name_or_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");

    let mut store = SessionStore::new(&path);
    let session = store.get_or_create("100");
    let mut embed = sample_embed();
    embed.fields = vec![
        EmbedField {
            name: "kept".to_string(),
            value: "yes".to_string(),
            inline: false,
        },
        EmbedField {
            name: String::new(),
            value: "dropped".to_string(),
            inline: false,
        },
        EmbedField {
            name: "dropped".to_string(),
            value: String::new(),
            inline: true,
        },
    ];
    session.embeds.push(embed);
    store.save_all().unwrap();

    let restored = SessionStore::load(&path);
    let fields = &restored.get("100").unwrap().embeds[0].fields;
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "kept");
}

#[test]
fn missing_snapshot_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::load(dir.path().join("absent.json"));
    assert!(store.is_empty());
}

#[test]
fn corrupt_snapshot_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = SessionStore::load(&path);
    assert!(store.is_empty());
}

#[test]
fn get_or_create_has_no_persistence_side_effect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    let mut store = SessionStore::new(&path);
    let session = store.get_or_create("100");
    assert!(session.embeds.is_empty());
    assert!(session.content.is_empty());
    assert!(!path.exists());
}

#[test]
fn delete_is_idempotent() {
    let mut store = SessionStore::new("unused.json");
    store.get_or_create("100");
    assert_eq!(store.len(), 1);
    store.delete("100");
    store.delete("100");
    assert!(store.get("100").is_none());
    assert!(store.is_empty());
}
