//! Chat endpoint.
//!
//! Contract: `POST /chat` with `{query, session_id}`; a missing or
//! unrecognizable session id yields a fresh one. The reply always carries
//! the session id so a client that opts into continuity can echo it back.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::agent;
use crate::state::AppState;

/// Inbound chat request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// `None` (or an invalid id) requests a fresh session.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Outbound chat reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub follow_up_questions: Vec<String>,
    pub session_id: Uuid,
}

/// Parse the client-provided session id, minting a new one when it is
/// absent or not a UUID.
fn resolve_session_id(raw: Option<&str>) -> Uuid {
    raw.and_then(|value| Uuid::parse_str(value.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Handle one chat exchange.
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let session_id = resolve_session_id(req.session_id.as_deref());
    let query = req.query.trim().to_owned();

    let canned = agent::respond(&query);
    let response = match &state.upstream {
        Some(upstream) => match upstream.relay(&query, session_id).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "upstream relay failed, using canned reply");
                canned.response
            }
        },
        None => canned.response,
    };

    let turns = state.record_turn(session_id, &query, &response).await;
    tracing::debug!(%session_id, turns, "chat turn recorded");

    Json(ChatResponse {
        response,
        follow_up_questions: canned.follow_ups,
        session_id,
    })
}
