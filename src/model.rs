//! Shared application state stored in Serenity's global context.

use std::sync::Arc;

use serenity::prelude::TypeMapKey;
use tokio::sync::RwLock;

use crate::audit::AuditLog;
use crate::store::SessionStore;

/// The central, shared state of the application. An `Arc<AppState>` is stored
/// in the global context for access from any command or interaction handler.
pub struct AppState {
    /// Per-user composition sessions, persisted to a JSON snapshot on every
    /// mutating action.
    pub sessions: Arc<RwLock<SessionStore>>,
    /// Append-only record of webhook sends and creations.
    pub audit: AuditLog,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
