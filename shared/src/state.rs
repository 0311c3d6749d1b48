//! ==============================================================================
//! state.rs - dashboard view lifecycle
//! ==============================================================================
//!
//! purpose:
//!     a mounted dashboard starts in `Loading` and leaves it at most once.
//!     what counts as a usable response is decided by the failure policy.
//!
//! policies:
//!     - passthrough (default): render whatever the backend returns. the
//!       status code and content type are ignored, nothing is validated,
//!       and a failure is handed back to the caller as unhandled while the
//!       view stays on its loading indicator.
//!     - strict: non-2xx, unparseable, empty or unrenderable responses move
//!       the view to `Failed` and are shown as an error message.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::payload::DashboardPayload;
use crate::render::RenderedDashboard;

// ==============================================================================
// fetch outcome
// ==============================================================================

/// what came back over the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// how the dashboard treats responses that are not what it expects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Passthrough,
    Strict,
}

impl FailurePolicy {
    /// turn a response into a payload
    ///
    /// `Ok(None)` means "nothing to show yet" and only happens under
    /// passthrough.
    pub fn evaluate(
        self,
        response: &FetchResponse,
    ) -> Result<Option<DashboardPayload>, DashboardError> {
        match self {
            FailurePolicy::Passthrough => DashboardPayload::parse_body(&response.body),
            FailurePolicy::Strict => {
                if !response.is_success() {
                    return Err(DashboardError::Status(response.status));
                }
                let payload = DashboardPayload::parse_body(&response.body)?
                    .ok_or(DashboardError::EmptyPayload)?;
                RenderedDashboard::from_payload(&payload)?;
                Ok(Some(payload))
            }
        }
    }
}

// ==============================================================================
// view state
// ==============================================================================

/// state of one mounted dashboard view
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(DashboardPayload),
    /// strict policy only
    Failed(String),
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }

    /// apply the outcome of the mount's single fetch
    ///
    /// only `Loading` accepts an outcome; `Loaded` and `Failed` are
    /// terminal. returns the error the view did not handle, if any, so the
    /// caller can report it on the host's unhandled-failure channel.
    pub fn settle(
        &mut self,
        policy: FailurePolicy,
        outcome: Result<Option<DashboardPayload>, DashboardError>,
    ) -> Option<DashboardError> {
        if !self.is_loading() {
            return None;
        }

        match (outcome, policy) {
            (Ok(Some(payload)), _) => {
                *self = DashboardState::Loaded(payload);
                None
            }
            (Ok(None), _) => None,
            (Err(err), FailurePolicy::Passthrough) => Some(err),
            (Err(err), FailurePolicy::Strict) => {
                *self = DashboardState::Failed(err.to_string());
                None
            }
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALICE: &str = r#"{"username":"alice","status":"active","orders":["order-1","order-2"]}"#;

    fn fetched(policy: FailurePolicy, response: FetchResponse) -> (DashboardState, Option<DashboardError>) {
        let mut state = DashboardState::default();
        let outcome = policy.evaluate(&response);
        let unhandled = state.settle(policy, outcome);
        (state, unhandled)
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert!(DashboardState::default().is_loading());
    }

    #[test]
    fn test_passthrough_loads_payload() {
        let (state, unhandled) = fetched(FailurePolicy::Passthrough, FetchResponse::new(200, ALICE));
        assert!(unhandled.is_none());
        match state {
            DashboardState::Loaded(payload) => assert_eq!(payload.username(), Some(&json!("alice"))),
            other => panic!("expected loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_passthrough_ignores_status() {
        let body = r#"{"error":"unauthorized"}"#;
        let (state, unhandled) = fetched(FailurePolicy::Passthrough, FetchResponse::new(401, body));
        assert!(unhandled.is_none());
        assert!(matches!(state, DashboardState::Loaded(_)));
    }

    #[test]
    fn test_passthrough_malformed_stays_loading() {
        let (state, unhandled) =
            fetched(FailurePolicy::Passthrough, FetchResponse::new(200, "not json"));
        assert!(state.is_loading());
        assert!(matches!(unhandled, Some(DashboardError::Malformed(_))));
    }

    #[test]
    fn test_passthrough_network_failure_stays_loading() {
        let mut state = DashboardState::Loading;
        let unhandled = state.settle(
            FailurePolicy::Passthrough,
            Err(DashboardError::Network("connection refused".into())),
        );
        assert!(state.is_loading());
        assert!(matches!(unhandled, Some(DashboardError::Network(_))));
    }

    #[test]
    fn test_passthrough_falsy_body_stays_loading() {
        let (state, unhandled) = fetched(FailurePolicy::Passthrough, FetchResponse::new(200, "null"));
        assert!(state.is_loading());
        assert!(unhandled.is_none());
    }

    #[test]
    fn test_passthrough_does_not_validate_fields() {
        let (state, unhandled) = fetched(FailurePolicy::Passthrough, FetchResponse::new(200, "{}"));
        assert!(unhandled.is_none());
        assert!(matches!(state, DashboardState::Loaded(_)));
    }

    #[test]
    fn test_strict_rejects_error_status() {
        let (state, unhandled) = fetched(FailurePolicy::Strict, FetchResponse::new(500, ALICE));
        assert!(unhandled.is_none());
        assert_eq!(state, DashboardState::Failed("unexpected status 500".to_string()));
    }

    #[test]
    fn test_strict_rejects_unrenderable_payload() {
        let (state, _) = fetched(FailurePolicy::Strict, FetchResponse::new(200, r#"{"username":"bob"}"#));
        assert_eq!(
            state,
            DashboardState::Failed("field `orders` is not a sequence".to_string())
        );
    }

    #[test]
    fn test_strict_rejects_empty_payload() {
        let (state, _) = fetched(FailurePolicy::Strict, FetchResponse::new(200, "null"));
        assert_eq!(state, DashboardState::Failed("empty payload".to_string()));
    }

    #[test]
    fn test_strict_network_failure_is_shown() {
        let mut state = DashboardState::Loading;
        let unhandled = state.settle(
            FailurePolicy::Strict,
            Err(DashboardError::Network("dns".into())),
        );
        assert!(unhandled.is_none());
        assert_eq!(state, DashboardState::Failed("network error: dns".to_string()));
    }

    #[test]
    fn test_strict_accepts_valid_payload() {
        let (state, _) = fetched(FailurePolicy::Strict, FetchResponse::new(200, ALICE));
        assert!(matches!(state, DashboardState::Loaded(_)));
    }

    #[test]
    fn test_loaded_is_terminal() {
        let policy = FailurePolicy::Passthrough;
        let mut state = DashboardState::Loading;
        state.settle(policy, policy.evaluate(&FetchResponse::new(200, ALICE)));
        let loaded = state.clone();

        let bob = r#"{"username":"bob","status":"idle","orders":[]}"#;
        let unhandled = state.settle(policy, policy.evaluate(&FetchResponse::new(200, bob)));
        assert!(unhandled.is_none());
        assert_eq!(state, loaded);

        let unhandled = state.settle(policy, Err(DashboardError::Network("late".into())));
        assert!(unhandled.is_none());
        assert_eq!(state, loaded);
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut state = DashboardState::Failed("unexpected status 503".into());
        state.settle(FailurePolicy::Strict, FailurePolicy::Strict.evaluate(&FetchResponse::new(200, ALICE)));
        assert_eq!(state, DashboardState::Failed("unexpected status 503".into()));
    }

    #[test]
    fn test_policy_names() {
        let policy: FailurePolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, FailurePolicy::Strict);
        assert_eq!(serde_json::to_string(&FailurePolicy::Passthrough).unwrap(), "\"passthrough\"");
    }
}
