//! # exam-room-client
//!
//! Leptos + WASM host for the exam navigator. The exam page is rendered by
//! the server with the paper embedded as JSON; this crate mounts on top of
//! it, shows one question at a time, and drives the `navigator` crate
//! through signal-backed implementations of its two seams.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
