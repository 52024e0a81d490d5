//! Webhook signature and MAC verification.
//!
//! These are the functions merchant callbacks should call before trusting a
//! delivery. Both return plain booleans and never panic or error: malformed
//! envelopes, missing fields, and failed comparisons are deliberately
//! indistinguishable, since every one of them means "do not trust this
//! callback".
//!
//! # Example
//!
//! ```rust
//! use makecommerce_api::webhooks::{verify_signature, WebhookEnvelope};
//! use makecommerce_api::SecretKey;
//!
//! let secret = SecretKey::new("s3cr3t").unwrap();
//! let envelope = WebhookEnvelope::new(Some("not json".to_string()), None);
//! assert!(!verify_signature(&envelope, &secret));
//! ```

use crate::config::SecretKey;
use crate::webhooks::envelope::extract_payload;
use crate::webhooks::signature::{
    compose_mac, compose_signature, constant_time_compare, extract_signature_type,
};
use crate::webhooks::WebhookEnvelope;

/// Verifies the payload `signature` field of a webhook envelope.
///
/// Extracts the payload, classifies its signature version, recomputes the
/// expected signature under the given secret, and compares it to the
/// received value in constant time. Payloads without a `signature` field
/// fail verification.
///
/// Returns `false` for any malformed or unverifiable envelope; this
/// function never panics.
#[must_use]
pub fn verify_signature(envelope: &WebhookEnvelope, secret: &SecretKey) -> bool {
    let Ok(payload) = extract_payload(envelope) else {
        return false;
    };
    let Some(signature_type) = extract_signature_type(&payload) else {
        return false;
    };
    let Some(received) = payload.get("signature").and_then(|v| v.as_str()) else {
        return false;
    };

    let expected = compose_signature(&payload, signature_type, secret);
    constant_time_compare(&expected, received)
}

/// Verifies the envelope-level `mac` field of a webhook envelope.
///
/// Recomputes the whole-payload MAC over the extracted payload and compares
/// it to the envelope's `mac` field (a sibling of `json`, not part of the
/// payload) in constant time.
///
/// Returns `false` for any malformed or unverifiable envelope; this
/// function never panics.
#[must_use]
pub fn verify_mac(envelope: &WebhookEnvelope, secret: &SecretKey) -> bool {
    let Some(received) = envelope.mac() else {
        return false;
    };
    let Ok(payload) = extract_payload(envelope) else {
        return false;
    };

    let expected = compose_mac(&payload, secret);
    constant_time_compare(&expected, received)
}
