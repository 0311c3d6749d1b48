//! ==============================================================================
//! lib.rs - Pizza Tracker Admin Client
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm client for the pizza tracker admin backend.
//!     `/` shows a static greeting, `/admin` loads the session-authenticated
//!     dashboard document and shows it.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the backend via same-origin fetch with cookies
//!     - `trunk serve` proxies `/api` to the backend during development
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use shared::{AppConfig, AppRoute};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod config;

pub use api::DashboardSource;
use components::{AdminDashboard, Home};

// ==============================================================================
// main entry point
// ==============================================================================

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("{err}, using defaults");
    }
    log::info!(
        "admin client starting (failure policy {:?})",
        config.failure_policy
    );

    mount_to_body(move || view! { <App config=config /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    if use_context::<DashboardSource>().is_none() {
        provide_context(DashboardSource::http(config.endpoint.clone()));
    }
    provide_context(config);

    view! {
        <Router>
            // unmatched paths render nothing
            <Routes fallback=|| ()>
                <Route
                    path=StaticSegment(AppRoute::Home.segment())
                    view=|| view! {
                        <Title text=AppRoute::Home.title() />
                        <Home />
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::Admin.segment())
                    view=|| view! {
                        <Title text=AppRoute::Admin.title() />
                        <AdminDashboard />
                    }
                />
            </Routes>
        </Router>
    }
}

// ==============================================================================
// tests
// ==============================================================================
