//! # attendsync
//!
//! Leptos + WASM client shell for the AttendSync attendance tracker.
//!
//! This crate owns the guarded layout wrapped around every authenticated page:
//! the session gate, role resolution against the hosted document store, the
//! connectivity badge, and the shared domain types used by page views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
