//! # tutor-client
//!
//! Leptos + WASM frontend for the tutoring marketplace: search courses, book
//! lessons, register as a teacher, leave reviews and pay for verification.
//!
//! All REST traffic goes through [`net::Gateway`], which attaches the stored
//! bearer token and handles session expiry. Page selection is driven by the
//! ordered table in [`routes`].

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
