//! # client
//!
//! Leptos + WASM front-end for EcoGuard, the forest-monitoring sensor
//! network. Static information pages sit beside a role-conditional
//! dashboard that requires signing in.
//!
//! Authentication state lives in `state::session::SessionStore`; every route
//! renders through the access gate in `util::auth`, which decides between
//! the page, the login view, and a loading placeholder.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
