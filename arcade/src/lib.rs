//! Mini-game engines for the customer-service widget.
//!
//! Each engine is a pure state machine: no renderer, no timers, no browser
//! types. The host (the Leptos client) feeds user input in, injects
//! randomness and the clock, and schedules the delays the engines ask for.
//! This keeps every transition testable on the host toolchain and lets the
//! UI layer stay a thin subscriber.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`memory`] | Pair-matching deck and the flip/match/mismatch machine |
//! | [`trivia`] | Question list, scoring, and the two advance policies |
//! | [`reaction`] | Waiting/armed/measured reaction-time machine |

pub mod memory;
pub mod reaction;
pub mod trivia;
