//! # portfolio
//!
//! Leptos + WASM single-page portfolio site.
//!
//! This crate contains the static profile record, the presentational
//! sections, and the contact section that relays messages to EmailJS. Form
//! state, the submission controller, and the wire schema live in the shared
//! `contact` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod profile;
pub mod state;
pub mod util;

/// Browser entry point: install panic + console logging, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
