//! Chat session state and its pure reducers.
//!
//! DESIGN
//! ======
//! The message list mutates only through the reducers here; the panel
//! component is a thin subscriber that feeds user input in and network
//! completions back. Every message carries its own UUID, so a reply racing
//! a newer send can never corrupt the list — order is append order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ChatReply;
use crate::util::language;

/// Seed message shown before the first exchange.
pub const GREETING_TEXT: &str = "Hello! How can I help you today?";

/// Canned reply appended when the chat endpoint is unreachable.
pub const APOLOGY_TEXT: &str =
    "Sorry, I'm having trouble connecting to the server. Please try again later.";

/// A single chat message. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    /// Client-clock milliseconds; display only, no ordering guarantee.
    pub timestamp: f64,
    /// Offer the inline language selector under this message.
    pub translate_options: bool,
}

impl ChatMessage {
    fn user(text: String, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            is_user: true,
            timestamp,
            translate_options: false,
        }
    }

    fn bot(text: String, translate_options: bool, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            is_user: false,
            timestamp,
            translate_options,
        }
    }
}

/// State for the chat panel: messages, follow-up suggestions, and the
/// optional server-assigned session identifier.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Follow-up suggestions from the latest reply; rendering is optional.
    pub follow_ups: Vec<String>,
    /// Server-assigned session id, adopted only when propagation is on.
    pub session_id: Option<String>,
    /// Echo the adopted session id on subsequent sends. Off by default,
    /// matching the reference flow which always sends an unset id.
    pub propagate_session: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING_TEXT.to_owned(), false, 0.0)],
            follow_ups: Vec::new(),
            session_id: None,
            propagate_session: false,
        }
    }
}

impl ChatState {
    /// Append the outbound message optimistically and return the trimmed
    /// query for dispatch. Returns `None` (no mutation) for blank input.
    pub fn begin_send(&mut self, text: &str, now_ms: f64) -> Option<String> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(query.to_owned(), now_ms));
        Some(query.to_owned())
    }

    /// Fold a completed chat request into the session.
    ///
    /// Success appends the reply (offering translation when the outbound
    /// text asked about languages) and stores follow-up suggestions.
    /// Failure appends the fixed apology; the session stays usable.
    pub fn apply_reply(&mut self, query: &str, result: Result<ChatReply, String>, now_ms: f64) {
        match result {
            Ok(reply) => {
                if self.propagate_session && reply.session_id.is_some() {
                    self.session_id = reply.session_id;
                }
                self.follow_ups = reply.follow_up_questions;
                self.messages.push(ChatMessage::bot(
                    reply.response,
                    wants_translation_offer(query),
                    now_ms,
                ));
            }
            Err(_) => {
                self.messages.push(ChatMessage::bot(APOLOGY_TEXT.to_owned(), false, now_ms));
            }
        }
    }

    /// Append the canned "language changed" notice for `code`.
    pub fn push_language_notice(&mut self, code: &str, now_ms: f64) {
        self.messages
            .push(ChatMessage::bot(language::change_notice(code).to_owned(), false, now_ms));
    }

    /// Session id to send with the next request, honoring the propagation
    /// setting.
    #[must_use]
    pub fn outbound_session_id(&self) -> Option<String> {
        if self.propagate_session {
            self.session_id.clone()
        } else {
            None
        }
    }
}

/// Whether the outbound text asks about languages or translation, which
/// makes the reply carry the inline language selector.
#[must_use]
pub fn wants_translation_offer(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("language") || lower.contains("translate")
}
