//! Liveness endpoint for an external keep-alive pinger.

use axum::routing::get;
use axum::Router;

async fn health() -> &'static str {
    "Bot is alive!"
}

/// Serves `GET /` until the process exits. Bind or serve failures are logged;
/// the bot keeps running without the endpoint.
pub async fn run(port: u16) {
    let app = Router::new().route("/", get(health));
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(port, error = ?e, "failed to bind liveness endpoint");
            return;
        }
    };
    tracing::info!(port, "liveness endpoint listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = ?e, "liveness endpoint stopped");
    }
}
