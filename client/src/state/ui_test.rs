use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_view_is_chat() {
    let state = UiState::default();
    assert_eq!(state.view, ActiveView::Chat);
    assert_eq!(state.chat_tab, ChatTab::Chat);
}

#[test]
fn ui_state_default_no_game_mounted() {
    let state = UiState::default();
    assert!(state.active_game.is_none());
}

#[test]
fn ui_state_default_language_is_english() {
    let state = UiState::default();
    assert_eq!(state.language, "en");
    assert!(state.notice.is_none());
}

// =============================================================
// Notices
// =============================================================

#[test]
fn push_notice_keeps_the_first_banner() {
    let mut state = UiState::default();
    state.push_notice("first");
    state.push_notice("second");
    assert_eq!(state.notice.as_deref(), Some("first"));
}

#[test]
fn push_notice_after_dismiss_shows_again() {
    let mut state = UiState::default();
    state.push_notice("first");
    state.notice = None;
    state.push_notice("second");
    assert_eq!(state.notice.as_deref(), Some("second"));
}

// =============================================================
// Enums
// =============================================================

#[test]
fn active_view_variants_are_distinct() {
    assert_ne!(ActiveView::Chat, ActiveView::Hub);
    assert_ne!(ActiveView::Chat, ActiveView::Games);
    assert_ne!(ActiveView::Hub, ActiveView::Games);
}

#[test]
fn active_game_variants_are_distinct() {
    assert_ne!(ActiveGame::Memory, ActiveGame::Quiz);
    assert_ne!(ActiveGame::Memory, ActiveGame::Reaction);
    assert_ne!(ActiveGame::Quiz, ActiveGame::Reaction);
}
