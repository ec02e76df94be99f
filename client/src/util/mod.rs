//! Shared helpers: language tables, clocks, seeded RNG, and the browser
//! speech bindings.

pub mod language;
pub mod rng;
pub mod speech;
pub mod time;
pub mod timers;
