//! Chat endpoint client.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result<ChatReply, String>` and fold failures into the
//! canned apology reply; nothing here panics or surfaces a fatal error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Same-origin chat endpoint served by the backend.
pub const CHAT_ENDPOINT: &str = "/chat";

/// Outbound chat request body.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
    /// `None` asks the server to assign a fresh session.
    pub session_id: Option<&'a str>,
}

/// Chat endpoint reply body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Send one chat query and await the reply.
///
/// # Errors
///
/// Returns an error string on network failure, a non-OK status, or a
/// malformed reply body. The error is terminal for this request only.
pub async fn send_chat(endpoint: &str, query: &str, session_id: Option<&str>) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { query, session_id };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_failed_message(resp.status()));
        }
        resp.json::<ChatReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, query, session_id);
        Err("not available on server".to_owned())
    }
}
