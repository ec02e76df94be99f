//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The JSON API is tiny: the chat endpoint and a liveness probe. CORS is
//! permissive because the widget may be embedded on another origin, and
//! the built client bundle is served as static files when present.

pub mod chat;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat::chat))
        .route("/health", get(health))
        .fallback_service(ServeDir::new("client/dist"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
