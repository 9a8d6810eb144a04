//! # client
//!
//! Leptos + WASM frontend for the gráfica NBL admin panel: dashboard
//! widgets, the order queue with its detail modal, and the resizable AI
//! chat panel wired to the server's chat relay.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
