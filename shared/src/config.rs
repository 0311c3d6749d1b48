//! Client configuration
//!
//! read once at start from an optional json block in the host page:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!     { "failure_policy": "strict", "log_level": "debug" }
//! </script>
//! ```
//!
//! every field is optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::FailurePolicy;

/// same-origin endpoint served by the session-authenticated backend
pub const DASHBOARD_ENDPOINT: &str = "/api/admin/dashboard";

/// id of the `<script>` element holding the config json
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app config: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// dashboard endpoint, relative to the page origin
    pub endpoint: String,
    pub failure_policy: FailurePolicy,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DASHBOARD_ENDPOINT.to_string(),
            failure_policy: FailurePolicy::Passthrough,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// parse the config block; blank text means defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}

// ==============================================================================
// tests
// ==============================================================================
