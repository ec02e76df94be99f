use super::*;
use crate::services::upstream::{ChatRelay, UpstreamError};
use std::sync::Arc;

// =========================================================================
// MockRelay
// =========================================================================

struct MockRelay {
    reply: Result<String, u16>,
}

#[async_trait::async_trait]
impl ChatRelay for MockRelay {
    async fn relay(&self, _query: &str, _session_id: Uuid) -> Result<String, UpstreamError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(UpstreamError::BadStatus(*status)),
        }
    }
}

// =========================================================================
// resolve_session_id
// =========================================================================

#[test]
fn missing_session_id_mints_a_fresh_one() {
    let a = resolve_session_id(None);
    let b = resolve_session_id(None);
    assert_ne!(a, b);
}

#[test]
fn valid_session_id_is_reused() {
    let id = Uuid::new_v4();
    assert_eq!(resolve_session_id(Some(&id.to_string())), id);
    assert_eq!(resolve_session_id(Some(&format!("  {id}  "))), id);
}

#[test]
fn invalid_session_id_mints_a_fresh_one() {
    let resolved = resolve_session_id(Some("not-a-uuid"));
    assert_ne!(resolved.to_string(), "not-a-uuid");
}

// =========================================================================
// chat handler
// =========================================================================

fn request(query: &str, session_id: Option<String>) -> Json<ChatRequest> {
    Json(ChatRequest { query: query.to_owned(), session_id })
}

#[tokio::test]
async fn chat_replies_with_canned_text_and_a_session_id() {
    let state = AppState::new(None);
    let Json(reply) = chat(State(state.clone()), request("hello", None)).await;
    assert!(reply.response.contains("Welcome"));
    assert!(!reply.follow_up_questions.is_empty());
    assert_eq!(state.session_turns(reply.session_id).await, 1);
}

#[tokio::test]
async fn chat_reuses_a_known_session() {
    let state = AppState::new(None);
    let Json(first) = chat(State(state.clone()), request("hello", None)).await;
    let Json(second) = chat(
        State(state.clone()),
        request("where is my order", Some(first.session_id.to_string())),
    )
    .await;
    assert_eq!(first.session_id, second.session_id);
    assert_eq!(state.session_turns(first.session_id).await, 2);
    assert_eq!(state.session_count().await, 1);
}

#[tokio::test]
async fn chat_uses_the_upstream_reply_when_it_succeeds() {
    let relay = MockRelay { reply: Ok("upstream says hi".to_owned()) };
    let state = AppState::new(Some(Arc::new(relay)));
    let Json(reply) = chat(State(state), request("hello", None)).await;
    assert_eq!(reply.response, "upstream says hi");
    // Follow-ups still come from the canned router.
    assert!(!reply.follow_up_questions.is_empty());
}

#[tokio::test]
async fn chat_falls_back_to_canned_when_the_upstream_fails() {
    let relay = MockRelay { reply: Err(503) };
    let state = AppState::new(Some(Arc::new(relay)));
    let Json(reply) = chat(State(state.clone()), request("hello", None)).await;
    assert!(reply.response.contains("Welcome"));
    assert_eq!(state.session_turns(reply.session_id).await, 1);
}

// =========================================================================
// Wire shapes
// =========================================================================

#[test]
fn chat_request_accepts_a_missing_session_id() {
    let req: ChatRequest = serde_json::from_str(r#"{"query":"hello"}"#).unwrap();
    assert_eq!(req.query, "hello");
    assert!(req.session_id.is_none());

    let req: ChatRequest = serde_json::from_str(r#"{"query":"hi","session_id":null}"#).unwrap();
    assert!(req.session_id.is_none());
}

#[test]
fn chat_response_serializes_the_contract_fields() {
    let reply = ChatResponse {
        response: "hi".to_owned(),
        follow_up_questions: vec!["next?".to_owned()],
        session_id: Uuid::nil(),
    };
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["response"], "hi");
    assert_eq!(json["follow_up_questions"][0], "next?");
    assert_eq!(json["session_id"], "00000000-0000-0000-0000-000000000000");
}
