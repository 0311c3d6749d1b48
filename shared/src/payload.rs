//! ==============================================================================
//! payload.rs - dashboard response body
//! ==============================================================================
//!
//! the backend owns this shape. the client has observed `username`, `status`
//! and `orders`, but the record is open: unknown fields are kept, and nothing
//! is validated until something tries to render it.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DashboardError;

pub const USERNAME: &str = "username";
pub const STATUS: &str = "status";
pub const ORDERS: &str = "orders";

/// parsed `GET /api/admin/dashboard` body, held as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardPayload(Value);

impl DashboardPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// parse a response body
    ///
    /// returns `Ok(None)` when the body is a falsy json value (`null`,
    /// `false`, `0`, `""`): there is nothing to show and the view keeps
    /// its loading indicator.
    pub fn parse_body(body: &str) -> Result<Option<Self>, DashboardError> {
        let value: Value = serde_json::from_str(body)?;
        if is_falsy(&value) {
            return Ok(None);
        }
        Ok(Some(Self(value)))
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn username(&self) -> Option<&Value> {
        self.field(USERNAME)
    }

    pub fn status(&self) -> Option<&Value> {
        self.field(STATUS)
    }

    pub fn orders(&self) -> Option<&Value> {
        self.field(ORDERS)
    }

    /// keys beyond the three the client renders
    pub fn extra_fields(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(map) => map
                .keys()
                .map(String::as_str)
                .filter(|key| ![USERNAME, STATUS, ORDERS].contains(key))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ==============================================================================
// tests
// ==============================================================================
