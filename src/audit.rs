//! Append-only log of privileged actions (webhook sends and creations).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

/// One line per event: `<ISO-8601 timestamp> | <message>`. The file is never
/// rewritten or truncated.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one record. Failures are logged rather than surfaced; losing
    /// an audit line must not abort the action it documents.
    pub fn record(&self, message: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = format!("{timestamp} | {message}\n");
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            tracing::error!(target: "audit", path = %self.path.display(), error = ?e, "failed to append audit record");
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
