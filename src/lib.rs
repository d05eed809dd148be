//! # visiosense-panel
//!
//! Leptos + WASM control panel for the VisioSense gesture recognition
//! backend. Renders the live status pushed over `/ws` and forwards
//! start/stop/minimize and settings changes to the backend's HTTP endpoints.
//!
//! Browser glue is behind the `csr` feature. State transitions, wire types,
//! connection bookkeeping, and command dispatch build natively for tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// WASM entry point: install the panic hook and logger, then mount the panel.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let loaded = crate::config::PanelConfig::from_window();
    let config = loaded.clone().unwrap_or_default();
    let _ = console_log::init_with_level(config.log_level());
    if let Err(e) = loaded {
        log::warn!("{e}; using defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
