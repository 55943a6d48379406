//! Per-user composition sessions and their JSON snapshot on disk.
//!
//! The whole map is rewritten on every save; there is no incremental write.
//! A missing or unreadable snapshot yields an empty store so the bot can
//! always start.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write session snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize session snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single named field of an embed. The composer UI never creates these,
/// but snapshots written by other tools may carry them and they round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// Plain-data form of one embed in a composition. Every part is optional;
/// an entirely empty embed is allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl EmbedData {
    /// Drops fields whose name or value is empty. Snapshots restored from
    /// disk go through this, so such entries do not survive a reload.
    pub fn sanitize(&mut self) {
        self.fields
            .retain(|f| !f.name.is_empty() && !f.value.is_empty());
    }
}

/// One user's in-progress message composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub embeds: Vec<EmbedData>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachment: String,
}

impl Session {
    /// A message is sendable once it carries at least one embed or some text.
    pub fn has_payload(&self) -> bool {
        !self.embeds.is_empty() || !self.content.is_empty()
    }
}

/// In-memory session map with an explicit load-at-start / save-on-mutation
/// lifecycle. Constructed once in `main` and carried in `AppState` so tests
/// can build their own against a scratch path.
pub struct SessionStore {
    path: PathBuf,
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sessions: HashMap::new(),
        }
    }

    /// Restores the snapshot at `path` if one exists. Corrupt or unreadable
    /// snapshots are logged and treated as an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = Self {
            path,
            sessions: HashMap::new(),
        };
        if !store.path.exists() {
            return store;
        }
        let raw = match fs::read_to_string(&store.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(target: "store", path = %store.path.display(), error = ?e, "could not read session snapshot, starting empty");
                return store;
            }
        };
        match serde_json::from_str::<HashMap<String, Session>>(&raw) {
            Ok(mut sessions) => {
                for session in sessions.values_mut() {
                    for embed in &mut session.embeds {
                        embed.sanitize();
                    }
                }
                store.sessions = sessions;
            }
            Err(e) => {
                tracing::warn!(target: "store", path = %store.path.display(), error = ?e, "malformed session snapshot, starting empty");
            }
        }
        store
    }

    /// Returns the user's session, creating an empty one if absent. Does not
    /// touch the snapshot file; the next mutating action persists it.
    pub fn get_or_create(&mut self, user_id: &str) -> &mut Session {
        self.sessions.entry(user_id.to_string()).or_default()
    }

    pub fn get(&self, user_id: &str) -> Option<&Session> {
        self.sessions.get(user_id)
    }

    /// Removes the user's session. Absent sessions are not an error.
    pub fn delete(&mut self, user_id: &str) {
        self.sessions.remove(user_id);
    }

    /// Rewrites the snapshot file with every in-memory session.
    pub fn save_all(&self) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(&self.sessions)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
