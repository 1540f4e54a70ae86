//! # blogpad
//!
//! Leptos + WASM client shell for the blogpad writing app.
//!
//! This crate owns the startup sequence and the route guards. It mounts a
//! loading placeholder, waits for the identity backend to report the first
//! session, renders the real UI tree once, and keeps private pages behind
//! the current session on every navigation.
//!
//! Browser-only glue sits behind the `csr` feature; the state machine, the
//! access policies and the session reducer are plain Rust and unit-tested
//! natively.

pub mod app;
pub mod auth;
pub mod boot;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point.
///
/// Runs once when the WASM module is instantiated.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_document();
    if let Ok(level) = config.log_level() {
        let _ = console_log::init_with_level(level);
    }

    boot::browser::launch(config);
}
