//! Reaction-time trial engine.
//!
//! DESIGN
//! ======
//! `Idle -> Waiting -> Armed -> Measured`, with `FalseStart` as a terminal
//! reachable only by clicking during `Waiting`. The engine never sleeps:
//! [`ReactionTimer::start`] returns the randomized arm delay for the host to
//! schedule, and [`ReactionTimer::arm`] is what that callback invokes. The
//! host must invalidate the previous callback before scheduling a new one
//! (the widget uses a generation counter); a stale `arm` firing outside
//! `Waiting` is ignored here as a second line of defense.

#[cfg(test)]
#[path = "reaction_test.rs"]
mod reaction_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive lower bound of the randomized arm delay, in milliseconds.
pub const MIN_ARM_DELAY_MS: u32 = 1200;
/// Exclusive upper bound of the randomized arm delay, in milliseconds.
pub const MAX_ARM_DELAY_MS: u32 = 3200;
/// Sentinel result for a click before the cue (not a real duration).
pub const FALSE_START_MS: i32 = -1;

/// Trial lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No trial running.
    #[default]
    Idle,
    /// Arm delay scheduled; the cue has not shown yet.
    Waiting,
    /// Cue is showing; the clock is running.
    Armed,
    /// Terminal: a reaction time was recorded.
    Measured,
    /// Terminal: the user clicked before the cue.
    FalseStart,
}

/// Result of feeding a user input into the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input in a phase that does not react to clicks.
    Ignored,
    /// Clicked during `Waiting`; the host should cancel the pending arm.
    FalseStart,
    /// Clicked during `Armed`; carries the elapsed milliseconds.
    Measured(i32),
}

/// One reaction trial.
#[derive(Clone, Debug, Default)]
pub struct ReactionTimer {
    phase: Phase,
    armed_at: Option<f64>,
    result_ms: Option<i32>,
}

impl ReactionTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or restart) a trial. Clears any previous result, enters
    /// `Waiting`, and returns the arm delay the host should schedule.
    /// Callable from every phase; the host must drop the previously
    /// scheduled arm callback when restarting.
    pub fn start(&mut self, rng: &mut impl Rng) -> u32 {
        self.phase = Phase::Waiting;
        self.armed_at = None;
        self.result_ms = None;
        rng.random_range(MIN_ARM_DELAY_MS..MAX_ARM_DELAY_MS)
    }

    /// The scheduled arm delay fired: show the cue and start the clock.
    /// Ignored outside `Waiting`.
    pub fn arm(&mut self, now_ms: f64) {
        if self.phase != Phase::Waiting {
            return;
        }
        self.phase = Phase::Armed;
        self.armed_at = Some(now_ms);
    }

    /// Feed a user click into the trial.
    pub fn register_input(&mut self, now_ms: f64) -> InputOutcome {
        match self.phase {
            Phase::Waiting => {
                self.phase = Phase::FalseStart;
                self.result_ms = Some(FALSE_START_MS);
                InputOutcome::FalseStart
            }
            Phase::Armed => {
                let elapsed = self
                    .armed_at
                    .map_or(0.0, |armed_at| (now_ms - armed_at).max(0.0));
                let elapsed = elapsed.round() as i32;
                self.phase = Phase::Measured;
                self.result_ms = Some(elapsed);
                InputOutcome::Measured(elapsed)
            }
            Phase::Idle | Phase::Measured | Phase::FalseStart => InputOutcome::Ignored,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Milliseconds for a measured trial, [`FALSE_START_MS`] for a false
    /// start, `None` while no terminal result exists.
    #[must_use]
    pub fn result_ms(&self) -> Option<i32> {
        self.result_ms
    }
}
