//! # quillpad
//!
//! Leptos + WASM single-page client for the Quillpad blog service.
//!
//! The app talks to a remote REST backend (`/api/auth`, `/api/blogs`,
//! `/api/profiles`) over JSON, carrying a bearer credential kept in browser
//! storage. Pure logic (credential claims decoding, status-to-error
//! mapping, list reconciliation) is browser-free and unit-tested on the
//! native target; everything that needs a browser sits behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log forwarding, then mount the
/// application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
