use super::*;

fn reply(text: &str) -> ChatReply {
    ChatReply {
        response: text.to_owned(),
        follow_up_questions: Vec::new(),
        session_id: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_opens_with_the_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, GREETING_TEXT);
    assert!(!state.messages[0].is_user);
    assert!(!state.propagate_session);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn whitespace_only_send_leaves_the_list_unchanged() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("  ", 1.0), None);
    assert_eq!(state.begin_send("", 1.0), None);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn begin_send_appends_trimmed_user_message() {
    let mut state = ChatState::default();
    let query = state.begin_send("  hello  ", 5.0);
    assert_eq!(query.as_deref(), Some("hello"));
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, "hello");
    assert!(last.is_user);
    assert!(!last.translate_options);
}

#[test]
fn message_ids_are_unique_within_the_session() {
    let mut state = ChatState::default();
    state.begin_send("one", 1.0);
    state.begin_send("two", 2.0);
    let mut ids: Vec<&str> = state.messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.messages.len());
}

// =============================================================
// apply_reply
// =============================================================

#[test]
fn successful_send_appends_exactly_two_messages() {
    let mut state = ChatState::default();
    let before = state.messages.len();
    let query = state.begin_send("hello", 1.0).unwrap();
    state.apply_reply(&query, Ok(reply("hi")), 2.0);
    assert_eq!(state.messages.len(), before + 2);
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, "hi");
    assert!(!last.is_user);
    assert!(!last.translate_options);
}

#[test]
fn translate_query_flags_the_reply() {
    let mut state = ChatState::default();
    let query = state.begin_send("translate this", 1.0).unwrap();
    state.apply_reply(&query, Ok(reply("sure")), 2.0);
    assert!(state.messages.last().unwrap().translate_options);
}

#[test]
fn language_query_flags_the_reply_case_insensitively() {
    let mut state = ChatState::default();
    let query = state.begin_send("What LANGUAGE is this?", 1.0).unwrap();
    state.apply_reply(&query, Ok(reply("Swedish")), 2.0);
    assert!(state.messages.last().unwrap().translate_options);
}

#[test]
fn failed_send_appends_the_apology() {
    let mut state = ChatState::default();
    let query = state.begin_send("hello", 1.0).unwrap();
    let before = state.messages.len();
    state.apply_reply(&query, Err("connection refused".to_owned()), 2.0);
    assert_eq!(state.messages.len(), before + 1);
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, APOLOGY_TEXT);
    assert!(!last.is_user);
    assert!(!last.translate_options);
}

#[test]
fn follow_ups_are_stored_from_the_latest_reply() {
    let mut state = ChatState::default();
    let mut r = reply("hi");
    r.follow_up_questions = vec!["More?".to_owned()];
    state.apply_reply("hello", Ok(r), 2.0);
    assert_eq!(state.follow_ups, vec!["More?".to_owned()]);
    state.apply_reply("next", Ok(reply("ok")), 3.0);
    assert!(state.follow_ups.is_empty());
}

// =============================================================
// Session propagation
// =============================================================

#[test]
fn session_id_is_ignored_by_default() {
    let mut state = ChatState::default();
    let mut r = reply("hi");
    r.session_id = Some("abc".to_owned());
    state.apply_reply("hello", Ok(r), 2.0);
    assert_eq!(state.session_id, None);
    assert_eq!(state.outbound_session_id(), None);
}

#[test]
fn session_id_is_adopted_when_propagation_is_on() {
    let mut state = ChatState { propagate_session: true, ..ChatState::default() };
    let mut r = reply("hi");
    r.session_id = Some("abc".to_owned());
    state.apply_reply("hello", Ok(r), 2.0);
    assert_eq!(state.session_id.as_deref(), Some("abc"));
    assert_eq!(state.outbound_session_id().as_deref(), Some("abc"));

    // A reply without an id keeps the adopted one.
    state.apply_reply("again", Ok(reply("ok")), 3.0);
    assert_eq!(state.session_id.as_deref(), Some("abc"));
}

// =============================================================
// Language notices
// =============================================================

#[test]
fn language_notice_is_appended_as_a_bot_message() {
    let mut state = ChatState::default();
    state.push_language_notice("sv", 1.0);
    let last = state.messages.last().unwrap();
    assert!(!last.is_user);
    assert_eq!(last.text, "Språket har ändrats till svenska.");
}

// =============================================================
// wants_translation_offer
// =============================================================

#[test]
fn translation_offer_matches_keywords_only() {
    assert!(wants_translation_offer("please translate"));
    assert!(wants_translation_offer("which Languages do you speak"));
    assert!(!wants_translation_offer("hello there"));
    assert!(!wants_translation_offer(""));
}
