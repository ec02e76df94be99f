use super::*;

#[test]
fn chat_request_serializes_null_session_id() {
    let payload = ChatRequest { query: "hello", session_id: None };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["query"], "hello");
    assert!(json["session_id"].is_null());
}

#[test]
fn chat_request_serializes_known_session_id() {
    let payload = ChatRequest { query: "hello", session_id: Some("abc") };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["session_id"], "abc");
}

#[test]
fn chat_reply_parses_minimal_body() {
    let reply: ChatReply = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
    assert_eq!(reply.response, "hi");
    assert!(reply.follow_up_questions.is_empty());
    assert!(reply.session_id.is_none());
}

#[test]
fn chat_reply_parses_full_body() {
    let body = r#"{"response":"hi","follow_up_questions":["a","b"],"session_id":"s1"}"#;
    let reply: ChatReply = serde_json::from_str(body).unwrap();
    assert_eq!(reply.follow_up_questions.len(), 2);
    assert_eq!(reply.session_id.as_deref(), Some("s1"));
}

#[test]
fn chat_failed_message_carries_the_status() {
    assert_eq!(chat_failed_message(502), "chat request failed: 502");
}
