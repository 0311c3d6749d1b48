//! ==============================================================================
//! lib.rs - shared types for the pizza tracker admin client
//! ==============================================================================
//!
//! purpose:
//!     everything the admin client decides without touching the browser:
//!     which view a path selects, what the dashboard payload looks like,
//!     how a payload turns into lines of text, and how a fetch outcome moves
//!     the dashboard view out of its loading state.
//!
//! relationships:
//!     - used by: dashboard (router, admin dashboard view, http client)
//!
//! design rationale:
//!     the leptos crate only builds for wasm32, so the logic lives here where
//!     plain `cargo test` can reach it. the view component is a thin shell
//!     over `DashboardState` and `RenderedDashboard`.
//!
//! ==============================================================================

pub mod config;
pub mod error;
pub mod payload;
pub mod render;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError, CONFIG_ELEMENT_ID, DASHBOARD_ENDPOINT};
pub use error::{DashboardError, RenderError};
pub use payload::DashboardPayload;
pub use render::{OrderItem, RenderedDashboard};
pub use routes::AppRoute;
pub use state::{DashboardState, FailurePolicy, FetchResponse};
