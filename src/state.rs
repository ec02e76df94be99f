//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the in-memory session map and the optional upstream relay.
//! Sessions live for the process lifetime only; per-session history is
//! capped so a long-lived widget cannot grow the map without bound.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::upstream::ChatRelay;

/// Maximum turns retained per session.
pub const HISTORY_CAP: usize = 50;

/// One completed exchange.
#[derive(Clone, Debug)]
pub struct Turn {
    pub query: String,
    pub reply: String,
}

/// Per-session conversation history.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub turns: Vec<Turn>,
}

/// Shared handler state: the session map and the optional upstream relay.
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub upstream: Option<Arc<dyn ChatRelay>>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Arc<dyn ChatRelay>>) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), upstream }
    }

    /// Append a completed exchange to the session, creating it on first
    /// contact. Returns the session's turn count after the append.
    pub async fn record_turn(&self, session_id: Uuid, query: &str, reply: &str) -> usize {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(session_id).or_default();
        session.turns.push(Turn { query: query.to_owned(), reply: reply.to_owned() });
        if session.turns.len() > HISTORY_CAP {
            let overflow = session.turns.len() - HISTORY_CAP;
            session.turns.drain(..overflow);
        }
        session.turns.len()
    }

    /// Turns recorded for a session; zero for unknown sessions.
    pub async fn session_turns(&self, session_id: Uuid) -> usize {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .map_or(0, |session| session.turns.len())
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
