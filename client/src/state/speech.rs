//! Speech capability state for the chat input and message playback.
//!
//! DESIGN
//! ======
//! Browser speech support is probed once when the chat panel mounts and the
//! result is threaded through this state instead of re-checked at call
//! sites. `Unknown` is the server-rendered value; the probe resolves it to
//! `Available` or `Unavailable` in the browser.

#[cfg(test)]
#[path = "speech_test.rs"]
mod speech_test;

/// Probe result for a platform capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Capability {
    /// Not probed yet (server render, or before the mount effect ran).
    #[default]
    Unknown,
    Available,
    Unavailable,
}

/// Speech-to-text and speech-synthesis capability and recording state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpeechState {
    pub recognition: Capability,
    pub synthesis: Capability,
    /// Microphone capture is live; the transcript replaces the input buffer.
    pub recording: bool,
    /// The capability advisory was already surfaced once.
    pub advisory_shown: bool,
}

impl SpeechState {
    /// Whether the record affordance should be enabled.
    #[must_use]
    pub fn can_record(&self) -> bool {
        self.recognition == Capability::Available
    }

    /// Whether an advisory should be surfaced now; flips the one-time flag.
    pub fn should_advise(&mut self) -> bool {
        if self.advisory_shown {
            return false;
        }
        self.advisory_shown = true;
        true
    }
}
