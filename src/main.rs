use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::ApplicationId;
use serenity::prelude::*;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use embedsmith_bot::audit::AuditLog;
use embedsmith_bot::store::SessionStore;
use embedsmith_bot::{handler, server, AppState};

const SESSIONS_PATH: &str = "sessions.json";
const AUDIT_LOG_PATH: &str = "admin-log.txt";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let application_id = env::var("APPLICATION_ID")
        .expect("Expected APPLICATION_ID in the environment.")
        .parse::<u64>()
        .expect("APPLICATION_ID must be a valid number.");
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let app_state = Arc::new(AppState {
        sessions: Arc::new(RwLock::new(SessionStore::load(SESSIONS_PATH))),
        audit: AuditLog::new(AUDIT_LOG_PATH),
    });
    {
        let store = app_state.sessions.read().await;
        tracing::info!(sessions = store.len(), "session snapshot restored");
    }

    tokio::spawn(server::run(port));

    // Interactions arrive with GUILDS alone; no message content is needed.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .application_id(ApplicationId::new(application_id))
        .event_handler(handler::Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(e) = client.start().await {
        tracing::error!(error = ?e, "client error");
    }
}
