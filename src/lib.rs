//! # session-gate
//!
//! Leptos + WASM client for session handling and login gating.
//!
//! This crate contains the session store, the auth gateway over the user REST
//! API, the route guard that keeps anonymous users out of protected pages, and
//! the login form validation state.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match config::ApiConfig::from_build_env() {
        Ok(config) => {
            log::info!("session-gate: api base {}", config.base_url);
            leptos::mount::mount_to_body(move || view! { <App config=config/> });
        }
        Err(e) => log::error!("session-gate: {e}"),
    }
}
