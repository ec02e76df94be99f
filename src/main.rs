mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::upstream::{ChatRelay, UpstreamClient, UpstreamError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the upstream relay (non-fatal: canned replies if unset).
    let upstream: Option<Arc<dyn ChatRelay>> = match UpstreamClient::from_env() {
        Ok(client) => {
            tracing::info!(url = client.url(), "chat upstream configured");
            Some(Arc::new(client))
        }
        Err(UpstreamError::NotConfigured) => {
            tracing::info!("no chat upstream configured — canned replies only");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat upstream unavailable — canned replies only");
            None
        }
    };

    let state = state::AppState::new(upstream);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cservice listening");
    axum::serve(listener, app).await.expect("server failed");
}
