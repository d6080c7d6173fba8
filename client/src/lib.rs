//! # kasuwa-client
//!
//! Leptos + WASM merchant frontend for the Kasuwan Gizo marketplace.
//!
//! The session, auth calls, route guard and navigation probe all live in the
//! `kasuwa` core crate. This crate renders pages over them: the app shell,
//! login / signup / email verification, and the auth-guarded merchant pages.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
