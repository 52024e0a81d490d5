//! Webhook envelope handling and signature verification.
//!
//! MakeCommerce authenticates webhook deliveries with shared-secret keyed
//! hashes. Every callback arrives as a [`WebhookEnvelope`] wrapping a
//! serialized payload; the payload may carry a `signature` field (two legacy
//! versions, V1 and V2) and the envelope may carry a whole-payload `mac`.
//!
//! # Overview
//!
//! - [`WebhookEnvelope`] / [`extract_payload`]: the wire wrapper and payload
//!   extraction
//! - [`SignatureType`] / [`extract_signature_type`]: signature version
//!   classification
//! - [`build_mac_input`] / [`compute_mac`]: canonical cleartext construction
//!   and the SHA-512 keyed hash
//! - [`compose_signature`] / [`compose_mac`] / [`compose_embedded_signature`]:
//!   expected-value composition
//! - [`verify_signature`] / [`verify_mac`]: boolean verification that never
//!   panics
//!
//! All operations are pure and synchronous; the secret key is passed
//! explicitly, so they are safe to call concurrently without coordination.
//!
//! # Example
//!
//! ```rust
//! use makecommerce_api::webhooks::{verify_signature, WebhookEnvelope};
//! use makecommerce_api::SecretKey;
//!
//! let secret = SecretKey::new("s3cr3t").unwrap();
//! let envelope: WebhookEnvelope = serde_json::from_str(
//!     r#"{"json": "{\"amount\": 10, \"status\": \"PAID\"}"}"#,
//! ).unwrap();
//!
//! // No signature field in the payload, so this delivery is untrusted
//! assert!(!verify_signature(&envelope, &secret));
//! ```
//!
//! # Security
//!
//! All signature and MAC comparisons use constant-time comparison to prevent
//! timing attacks. Verification failure and malformed input are deliberately
//! indistinguishable to callers.

mod envelope;
mod errors;
mod signature;
mod verification;

pub use envelope::{extract_payload, Payload, WebhookEnvelope};
pub use errors::WebhookError;
pub use signature::{
    build_mac_input, compose_embedded_signature, compose_mac, compose_signature, compute_mac,
    extract_signature_type, signature_fields, SignatureType,
};
pub use verification::{verify_mac, verify_signature};
