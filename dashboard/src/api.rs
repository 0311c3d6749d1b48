//! ==============================================================================
//! api.rs - client for the session-authenticated dashboard endpoint
//! ==============================================================================
//!
//! one request: `GET /api/admin/dashboard`, same origin, cookies included.
//! the backend authenticates with a server-side session cookie, so the
//! request must carry credentials.
//!
//! no retry, no timeout, no abort. the status code and body are handed to
//! the failure policy untouched.
//!
//! ==============================================================================

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use gloo_net::http::Request;
use shared::{DashboardError, FetchResponse};
use web_sys::RequestCredentials;

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<FetchResponse, DashboardError>>>>;

// ==============================================================================
// source
// ==============================================================================

/// where the dashboard view gets its data from
///
/// provided through leptos context. production uses [`DashboardSource::http`];
/// tests swap in a scripted source.
#[derive(Clone)]
pub struct DashboardSource {
    fetch: Arc<dyn Fn() -> FetchFuture + Send + Sync>,
}

impl DashboardSource {
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<FetchResponse, DashboardError>> + 'static,
    {
        Self {
            fetch: Arc::new(move || Box::pin(fetch())),
        }
    }

    /// credentialed fetch against `endpoint`
    pub fn http(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::new(move || fetch_dashboard(endpoint.clone()))
    }

    /// start one request
    pub fn fetch(&self) -> FetchFuture {
        (self.fetch)()
    }
}

// ==============================================================================
// API functions
// ==============================================================================

/// GET the dashboard document with the session cookie attached
pub async fn fetch_dashboard(endpoint: String) -> Result<FetchResponse, DashboardError> {
    let response = Request::get(&endpoint)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| DashboardError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| DashboardError::Network(e.to_string()))?;

    log::debug!("dashboard responded {} ({} bytes)", status, body.len());
    Ok(FetchResponse { status, body })
}
