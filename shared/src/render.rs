//! ==============================================================================
//! render.rs - payload to display text
//! ==============================================================================
//!
//! a loaded dashboard shows, in order:
//!     - "Welcome, " + username
//!     - "Status: " + status
//!     - one list item per entry of `orders`, keyed by position
//!
//! values are turned into text the way a json value renders as a text node:
//! strings as-is, numbers printed, null and booleans as nothing, arrays
//! concatenated. objects cannot be shown. a missing username or status just
//! renders empty; a missing `orders` cannot be iterated and is a fault.
//!
//! ==============================================================================

use serde_json::{Number, Value};

use crate::error::RenderError;
use crate::payload::{DashboardPayload, ORDERS, STATUS, USERNAME};

/// one `<li>` of the orders list
///
/// identity is the position in the sequence, not the content: swapping two
/// values looks the same as replacing both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub index: usize,
    pub text: String,
}

/// text content of a loaded dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDashboard {
    pub welcome: String,
    pub status: String,
    pub orders: Vec<OrderItem>,
}

impl RenderedDashboard {
    pub fn from_payload(payload: &DashboardPayload) -> Result<Self, RenderError> {
        let welcome = format!("Welcome, {}", text_of(USERNAME, payload.username())?);
        let status = format!("Status: {}", text_of(STATUS, payload.status())?);

        let orders = match payload.orders() {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Ok(OrderItem {
                        index,
                        text: text_of(ORDERS, Some(item))?,
                    })
                })
                .collect::<Result<Vec<_>, RenderError>>()?,
            _ => return Err(RenderError::NotASequence(ORDERS.to_string())),
        };

        Ok(Self {
            welcome,
            status,
            orders,
        })
    }
}

fn text_of(field: &str, value: Option<&Value>) -> Result<String, RenderError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(_)) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(number_text(n)),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text_of(field, Some(item)))
            .collect(),
        Some(Value::Object(_)) => Err(RenderError::ObjectAsText(field.to_string())),
    }
}

// 3.0 prints as "3", 1e21 as "1e+21", 1e-7 as "1e-7"
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) => exponent_text(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_text(f: f64) -> String {
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{mantissa}e{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => formatted,
    }
}

// ==============================================================================
// tests
// ==============================================================================
