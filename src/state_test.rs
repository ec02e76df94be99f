use super::*;

#[tokio::test]
async fn record_turn_creates_the_session_on_first_contact() {
    let state = AppState::new(None);
    let session_id = Uuid::new_v4();
    assert_eq!(state.session_count().await, 0);

    let turns = state.record_turn(session_id, "hello", "hi").await;
    assert_eq!(turns, 1);
    assert_eq!(state.session_count().await, 1);
    assert_eq!(state.session_turns(session_id).await, 1);
}

#[tokio::test]
async fn turns_accumulate_per_session() {
    let state = AppState::new(None);
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    state.record_turn(a, "one", "1").await;
    state.record_turn(a, "two", "2").await;
    state.record_turn(b, "three", "3").await;

    assert_eq!(state.session_turns(a).await, 2);
    assert_eq!(state.session_turns(b).await, 1);
    assert_eq!(state.session_count().await, 2);
}

#[tokio::test]
async fn history_is_capped() {
    let state = AppState::new(None);
    let session_id = Uuid::new_v4();
    for index in 0..(HISTORY_CAP + 10) {
        state.record_turn(session_id, &format!("q{index}"), "r").await;
    }
    assert_eq!(state.session_turns(session_id).await, HISTORY_CAP);
}

#[tokio::test]
async fn unknown_session_has_no_turns() {
    let state = AppState::new(None);
    assert_eq!(state.session_turns(Uuid::new_v4()).await, 0);
}
