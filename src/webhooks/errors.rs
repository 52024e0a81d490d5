//! Webhook-specific error types for the MakeCommerce API SDK.
//!
//! This module contains error types for webhook envelope extraction.
//!
//! # Error Handling
//!
//! [`WebhookError::MalformedEnvelope`] is raised by
//! [`extract_payload`](crate::webhooks::extract_payload) when the envelope
//! cannot produce a payload. The verification functions catch it internally
//! and degrade to `false`; it only surfaces when extraction is invoked
//! directly.

use thiserror::Error;

/// Error type for webhook envelope handling.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::webhooks::WebhookError;
///
/// let error = WebhookError::MalformedEnvelope {
///     reason: "missing 'json' field".to_string(),
/// };
/// assert!(error.to_string().contains("missing 'json' field"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The webhook envelope is missing or carries an unusable payload.
    ///
    /// Raised when the envelope has no `json` field, the field does not
    /// parse as JSON, or it parses to something other than a non-empty
    /// object.
    #[error("Unable to extract payload from webhook envelope: {reason}")]
    MalformedEnvelope {
        /// Why the envelope was rejected.
        reason: String,
    },
}
