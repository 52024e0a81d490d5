//! Webhook envelope wire type and payload extraction.
//!
//! MakeCommerce delivers webhook callbacks as a small wrapper object:
//!
//! ```json
//! { "json": "<stringified JSON payload>", "mac": "<hex string>" }
//! ```
//!
//! The payload itself is a JSON object serialized into the `json` field.
//! It must be re-parsed before verification, preserving source key order
//! so the whole-payload MAC input matches the wire representation.

use serde::Deserialize;

use crate::webhooks::WebhookError;

/// A webhook payload: a JSON object with source key order preserved.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// An incoming webhook envelope from the payment gateway.
///
/// Both fields are optional on the wire; extraction and verification report
/// their absence rather than failing deserialization.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::webhooks::WebhookEnvelope;
///
/// let envelope: WebhookEnvelope =
///     serde_json::from_str(r#"{"json": "{\"status\": \"PAID\"}", "mac": "ABCD"}"#).unwrap();
/// assert_eq!(envelope.mac(), Some("ABCD"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEnvelope {
    /// Serialized payload from the `json` field.
    json: Option<String>,
    /// Whole-payload MAC from the `mac` field, sibling of `json`.
    mac: Option<String>,
}

impl WebhookEnvelope {
    /// Creates a new envelope from its wire fields.
    #[must_use]
    pub const fn new(json: Option<String>, mac: Option<String>) -> Self {
        Self { json, mac }
    }

    /// Returns the serialized payload, if present.
    #[must_use]
    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }

    /// Returns the MAC field value, if present.
    #[must_use]
    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }
}

/// Extracts and parses the payload object from a webhook envelope.
///
/// # Errors
///
/// Returns [`WebhookError::MalformedEnvelope`] if the `json` field is
/// missing, is not valid JSON, or does not parse to a non-empty object.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::webhooks::{extract_payload, WebhookEnvelope};
///
/// let envelope = WebhookEnvelope::new(Some(r#"{"amount": 10}"#.to_string()), None);
/// let payload = extract_payload(&envelope).unwrap();
/// assert_eq!(payload.get("amount"), Some(&serde_json::json!(10)));
/// ```
pub fn extract_payload(envelope: &WebhookEnvelope) -> Result<Payload, WebhookError> {
    let json = envelope.json().ok_or_else(|| WebhookError::MalformedEnvelope {
        reason: "missing 'json' field".to_string(),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| WebhookError::MalformedEnvelope {
            reason: format!("invalid JSON in 'json' field: {e}"),
        })?;

    let payload = match value {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(WebhookError::MalformedEnvelope {
                reason: "payload is not a JSON object".to_string(),
            })
        }
    };

    if payload.is_empty() {
        return Err(WebhookError::MalformedEnvelope {
            reason: "payload is empty".to_string(),
        });
    }

    Ok(payload)
}
