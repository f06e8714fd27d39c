//! # client
//!
//! Leptos + WASM host for the EchoSight landing page.
//!
//! The page itself is plain markup; the three canvas effects (particle text
//! hero, star field, cursor trail) live in the `canvas` crate. Components in
//! this crate mount those engines, forward DOM events to them, and run their
//! animation loops.

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
