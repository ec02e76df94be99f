//! # client
//!
//! Leptos + WASM frontend for the CService customer-service widget: a
//! tabbed interface with a support chat (speech input, audio playback,
//! per-message translation), a cultural hub (quiz, FAQ, video), and three
//! mini-games driven by the pure engines in the `arcade` crate.
//!
//! Decision logic lives in plain state structs (`state`) and free functions
//! (`net`, `util`) so it tests on the host toolchain; browser and network
//! access is confined to `hydrate`-gated code paths.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
