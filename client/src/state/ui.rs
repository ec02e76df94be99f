//! Local UI chrome state (active view, chat tab, selected game, notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `speech`) so the view selector and banners can evolve independently of
//! the message list and the game engines.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level view mounted by the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Customer-service chat.
    #[default]
    Chat,
    /// Cultural hub: quiz, FAQ, video.
    Hub,
    /// Mini-game menu and the three games.
    Games,
}

/// Tabs inside the chat card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatTab {
    #[default]
    Chat,
    Translate,
}

/// Which mini-game is mounted, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveGame {
    Memory,
    Quiz,
    Reaction,
}

/// UI state for the view selector, chat tabs, and the advisory banner.
#[derive(Clone, Debug)]
pub struct UiState {
    pub view: ActiveView,
    pub chat_tab: ChatTab,
    /// `None` shows the games menu.
    pub active_game: Option<ActiveGame>,
    /// Current language code for translation, notices, and speech locale.
    pub language: String,
    /// One-shot advisory banner (capability warnings). Cleared on dismiss.
    pub notice: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: ActiveView::Chat,
            chat_tab: ChatTab::Chat,
            active_game: None,
            language: "en".to_owned(),
            notice: None,
        }
    }
}

impl UiState {
    /// Surface an advisory banner, keeping the first one until dismissed.
    pub fn push_notice(&mut self, text: &str) {
        if self.notice.is_none() {
            self.notice = Some(text.to_owned());
        }
    }
}
