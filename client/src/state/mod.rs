//! Application state, kept apart from rendering.

pub mod chat;
pub mod speech;
pub mod ui;
