//! Network access for the widget.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs, since both endpoints are only meaningful in the browser.

pub mod api;
pub mod translate;
