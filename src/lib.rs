//! # auth-guard-client
//!
//! Leptos + WASM frontend for the Auth Guard application: credential
//! submission, session recovery, and route guarding against a remote
//! identity service.
//!
//! This crate contains pages, components, the session state machine and
//! its controller, the identity-service HTTP client, and shared form
//! validation helpers.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the WASM loader in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
