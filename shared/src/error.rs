//! Error types for fetching and rendering the dashboard

use thiserror::Error;

/// why a dashboard fetch did not produce a payload
#[derive(Debug, Error)]
pub enum DashboardError {
    /// request never produced a response (connection refused, dns, cors...)
    #[error("network error: {0}")]
    Network(String),

    /// non-2xx status, only raised under the strict policy
    #[error("unexpected status {0}")]
    Status(u16),

    /// body is not valid json
    #[error("malformed body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// body parsed to a falsy value, only raised under the strict policy
    #[error("empty payload")]
    EmptyPayload,

    /// payload parsed but cannot be rendered
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// a payload field that cannot be shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("field `{0}` is an object and cannot be rendered as text")]
    ObjectAsText(String),

    #[error("field `{0}` is not a sequence")]
    NotASequence(String),
}
