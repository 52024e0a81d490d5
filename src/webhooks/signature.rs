//! Signature and MAC composition for webhook payloads.
//!
//! The gateway authenticates webhook callbacks with a keyed hash: the shared
//! secret is appended to a canonical cleartext input and the result is
//! hashed with SHA-512, hex-encoded, and upper-cased. This is a plain keyed
//! hash, not an HMAC construction.
//!
//! Two legacy signature versions exist for the payload's `signature` field,
//! distinguished by the presence of a `transaction` key. Each version signs
//! a fixed ordered list of payload fields concatenated without delimiters;
//! the order is part of the wire contract. A third input form (`Mac`) signs
//! the entire payload as serialized JSON and backs the envelope-level `mac`
//! field.
//!
//! # Example
//!
//! ```rust
//! use makecommerce_api::webhooks::{compose_signature, SignatureType};
//! use makecommerce_api::SecretKey;
//!
//! let secret = SecretKey::new("s3cr3t").unwrap();
//! let payload = serde_json::from_str(
//!     r#"{"paymentId": "abc", "amount": 10, "status": "COMPLETED"}"#,
//! ).unwrap();
//!
//! let signature = compose_signature(&payload, SignatureType::V1, &secret);
//! assert_eq!(signature.len(), 128); // SHA-512 produces 64 bytes = 128 hex chars
//! ```

use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use crate::config::SecretKey;
use crate::webhooks::Payload;

/// Signature versions understood by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureType {
    /// Legacy payment-status callback signature (no `transaction` field).
    V1,
    /// Transaction-status callback signature.
    V2,
    /// Whole-payload integrity check backing the envelope `mac` field.
    Mac,
}

/// Ordered payload fields signed by the V1 scheme.
const V1_FIELDS: &[&str] = &["paymentId", "amount", "status"];

/// Ordered payload fields signed by the V2 scheme.
const V2_FIELDS: &[&str] = &["amount", "currency", "reference", "transaction", "status"];

/// Returns the ordered field list a signature version signs.
///
/// Field order and the undelimited concatenation are part of the wire
/// contract with the gateway. [`SignatureType::Mac`] signs the whole
/// payload rather than a field list, so its table is empty.
#[must_use]
pub const fn signature_fields(signature_type: SignatureType) -> &'static [&'static str] {
    match signature_type {
        SignatureType::V1 => V1_FIELDS,
        SignatureType::V2 => V2_FIELDS,
        SignatureType::Mac => &[],
    }
}

/// Classifies which signature version a payload carries.
///
/// Returns `None` when the payload has no usable `signature` field. A
/// `signature` without a `transaction` field is V1; with both present it is
/// V2. Null values count as absent.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::webhooks::{extract_signature_type, SignatureType};
///
/// let payload = serde_json::from_str(r#"{"signature": "AB", "amount": 1}"#).unwrap();
/// assert_eq!(extract_signature_type(&payload), Some(SignatureType::V1));
/// ```
#[must_use]
pub fn extract_signature_type(payload: &Payload) -> Option<SignatureType> {
    if !has_field(payload, "signature") {
        return None;
    }
    if has_field(payload, "transaction") {
        Some(SignatureType::V2)
    } else {
        Some(SignatureType::V1)
    }
}

fn has_field(payload: &Payload, key: &str) -> bool {
    matches!(payload.get(key), Some(value) if !value.is_null())
}

/// Builds the cleartext MAC input for a payload and signature version.
///
/// For [`SignatureType::Mac`] the input is the compact JSON serialization
/// of the payload in source key order. For V1/V2 it is the concatenation of
/// the version's field values, in table order, with no delimiter.
///
/// Field-to-string rules: booleans render as the literal strings `true` and
/// `false`; missing or null fields render as the empty string; strings
/// render unquoted; numbers render in their canonical decimal form.
#[must_use]
pub fn build_mac_input(payload: &Payload, signature_type: SignatureType) -> String {
    if signature_type == SignatureType::Mac {
        return serde_json::to_string(payload).unwrap_or_default();
    }

    signature_fields(signature_type)
        .iter()
        .map(|field| field_to_string(payload.get(*field)))
        .collect()
}

/// Renders a single payload field value for MAC input.
fn field_to_string(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        // Composite values never appear in signed fields; fall back to JSON text.
        Some(other) => other.to_string(),
    }
}

/// Computes the keyed hash over a cleartext input.
///
/// The secret key is appended to the input and the result is hashed with
/// SHA-512, producing an upper-case hex string.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::webhooks::compute_mac;
/// use makecommerce_api::SecretKey;
///
/// let secret = SecretKey::new("secret").unwrap();
/// let mac = compute_mac("input", &secret);
/// assert_eq!(mac.len(), 128);
/// assert!(mac.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
/// ```
#[must_use]
pub fn compute_mac(input: &str, secret: &SecretKey) -> String {
    let mut hasher = Sha512::new();
    hasher.update(input.as_bytes());
    hasher.update(secret.as_ref().as_bytes());
    hex_upper::encode(hasher.finalize())
}

/// Composes the expected signature for a payload under a signature version.
///
/// Equivalent to [`compute_mac`] over [`build_mac_input`].
#[must_use]
pub fn compose_signature(
    payload: &Payload,
    signature_type: SignatureType,
    secret: &SecretKey,
) -> String {
    compute_mac(&build_mac_input(payload, signature_type), secret)
}

/// Composes the whole-payload MAC for the envelope `mac` field.
#[must_use]
pub fn compose_mac(payload: &Payload, secret: &SecretKey) -> String {
    compose_signature(payload, SignatureType::Mac, secret)
}

/// Composes the signature for a client-embedded checkout widget.
///
/// Used before any full payload exists: the input is the concatenation of
/// `amount` (default `0`), `currency` (default empty), and `reference`
/// (default empty).
///
/// # Example
///
/// ```rust
/// use makecommerce_api::webhooks::compose_embedded_signature;
/// use makecommerce_api::SecretKey;
///
/// let secret = SecretKey::new("secret").unwrap();
/// let sig = compose_embedded_signature(Some("10.00"), Some("EUR"), Some("order-1"), &secret);
/// assert_eq!(sig.len(), 128);
/// ```
#[must_use]
pub fn compose_embedded_signature(
    amount: Option<&str>,
    currency: Option<&str>,
    reference: Option<&str>,
    secret: &SecretKey,
) -> String {
    let input = format!(
        "{}{}{}",
        amount.unwrap_or("0"),
        currency.unwrap_or(""),
        reference.unwrap_or("")
    );
    compute_mac(&input, secret)
}

/// Performs constant-time comparison of two strings.
///
/// Used for signature and MAC comparisons to prevent timing attacks.
#[must_use]
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

// Internal upper-case hex encoding since we don't want to add another dependency
mod hex_upper {
    const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn secret() -> SecretKey {
        SecretKey::new("s3cr3t").unwrap()
    }

    fn payload_from(json: &str) -> Payload {
        serde_json::from_str(json).unwrap()
    }

    // ========================================================================
    // Field Table Tests
    // ========================================================================

    #[test]
    fn test_signature_field_tables_match_gateway_contract() {
        assert_eq!(
            signature_fields(SignatureType::V1),
            ["paymentId", "amount", "status"]
        );
        assert_eq!(
            signature_fields(SignatureType::V2),
            ["amount", "currency", "reference", "transaction", "status"]
        );
        assert!(signature_fields(SignatureType::Mac).is_empty());
    }

    // ========================================================================
    // Classification Tests
    // ========================================================================

    #[test]
    fn test_classification_without_signature_is_none() {
        let payload = payload_from(r#"{"amount": 10, "status": "PAID"}"#);
        assert_eq!(extract_signature_type(&payload), None);
    }

    #[test]
    fn test_classification_with_signature_only_is_v1() {
        let payload = payload_from(r#"{"signature": "AB", "amount": 10}"#);
        assert_eq!(extract_signature_type(&payload), Some(SignatureType::V1));
    }

    #[test]
    fn test_classification_with_signature_and_transaction_is_v2() {
        let payload = payload_from(r#"{"signature": "AB", "transaction": "txn1"}"#);
        assert_eq!(extract_signature_type(&payload), Some(SignatureType::V2));
    }

    #[test]
    fn test_classification_treats_null_signature_as_absent() {
        let payload = payload_from(r#"{"signature": null, "amount": 10}"#);
        assert_eq!(extract_signature_type(&payload), None);
    }

    #[test]
    fn test_classification_treats_null_transaction_as_absent() {
        let payload = payload_from(r#"{"signature": "AB", "transaction": null}"#);
        assert_eq!(extract_signature_type(&payload), Some(SignatureType::V1));
    }

    // ========================================================================
    // MAC Input Tests
    // ========================================================================

    #[test]
    fn test_v1_mac_input_concatenates_fields_in_order() {
        let payload =
            payload_from(r#"{"paymentId": "abc", "amount": 10, "status": "COMPLETED"}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "abc10COMPLETED");
    }

    #[test]
    fn test_v2_mac_input_concatenates_fields_in_order() {
        let payload = payload_from(
            r#"{"amount": 5, "currency": "EUR", "reference": "ref1", "transaction": "txn1", "status": "PAID"}"#,
        );
        assert_eq!(build_mac_input(&payload, SignatureType::V2), "5EURref1txn1PAID");
    }

    #[test]
    fn test_mac_input_follows_table_order_not_payload_order() {
        // Payload key order differs from the V1 table order
        let payload =
            payload_from(r#"{"status": "COMPLETED", "amount": 10, "paymentId": "abc"}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "abc10COMPLETED");
    }

    #[test]
    fn test_missing_fields_render_as_empty_string() {
        let payload = payload_from(r#"{"amount": 10}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "10");
    }

    #[test]
    fn test_null_fields_render_as_empty_string() {
        let payload = payload_from(r#"{"paymentId": null, "amount": 10, "status": "PAID"}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "10PAID");
    }

    #[test]
    fn test_boolean_fields_render_as_literal_words() {
        let payload = payload_from(r#"{"paymentId": true, "amount": false, "status": "OK"}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "truefalseOK");
    }

    #[test]
    fn test_zero_renders_as_zero() {
        let payload = payload_from(r#"{"paymentId": "p", "amount": 0, "status": "OK"}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "p0OK");
    }

    #[test]
    fn test_decimal_amount_renders_canonically() {
        let payload = payload_from(r#"{"paymentId": "p", "amount": 10.5, "status": "OK"}"#);
        assert_eq!(build_mac_input(&payload, SignatureType::V1), "p10.5OK");
    }

    #[test]
    fn test_mac_input_serializes_whole_payload_in_source_order() {
        let payload = payload_from(r#"{"b": 1, "a": "x"}"#);
        assert_eq!(
            build_mac_input(&payload, SignatureType::Mac),
            r#"{"b":1,"a":"x"}"#
        );
    }

    // ========================================================================
    // Hashing Tests
    // ========================================================================

    #[test]
    fn test_compute_mac_matches_known_sha512_vector() {
        // SHA-512("abc10COMPLETEDs3cr3t"), upper-case hex
        assert_eq!(
            compute_mac("abc10COMPLETED", &secret()),
            "936178FF8107EE9CDBD885ABE09718390535ECC36029ECA4AC8055E2FE28AD825FC70B85734A8769D106F9048C182D5B4B4A035772E6FC1DE90B1C5EECD43302"
        );
    }

    #[test]
    fn test_compute_mac_is_uppercase_hex() {
        let mac = compute_mac("anything", &secret());
        assert_eq!(mac.len(), 128);
        assert!(mac
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_compute_mac_depends_on_secret() {
        let other = SecretKey::new("s3cr3u").unwrap();
        assert_ne!(compute_mac("input", &secret()), compute_mac("input", &other));
    }

    #[test]
    fn test_compose_signature_is_idempotent() {
        let payload =
            payload_from(r#"{"paymentId": "abc", "amount": 10, "status": "COMPLETED"}"#);
        let first = compose_signature(&payload, SignatureType::V1, &secret());
        let second = compose_signature(&payload, SignatureType::V1, &secret());
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_v2_signature_matches_known_vector() {
        let payload = payload_from(
            r#"{"amount": 5, "currency": "EUR", "reference": "ref1", "transaction": "txn1", "status": "PAID"}"#,
        );
        // SHA-512("5EURref1txn1PAIDs3cr3t")
        assert_eq!(
            compose_signature(&payload, SignatureType::V2, &secret()),
            "8D5FFB1DD1AFF8A60AA96BFC4A3B2C8D1334996A1EE142E839A5ED659FB7370A514859BF814737208CE608E5673A3F6FB5ACD295F09941C2D842E7061452C0B5"
        );
    }

    #[test]
    fn test_compose_mac_matches_known_vector() {
        let mut payload = Payload::new();
        payload.insert("amount".to_string(), json!(10));
        payload.insert("status".to_string(), json!("COMPLETED"));
        // SHA-512 of '{"amount":10,"status":"COMPLETED"}' + "s3cr3t"
        assert_eq!(
            compose_mac(&payload, &secret()),
            "03B934C78063EAAEB178A00E9AC228759360EACE501D7ED77C62C56D2BD872EECE886B30AA7CD3018DF6132054CED5D3FA0068B63D638E778CC8BD8EEC3353BE"
        );
    }

    // ========================================================================
    // Embedded Signature Tests
    // ========================================================================

    #[test]
    fn test_embedded_signature_matches_known_vector() {
        // SHA-512("100EURorder-1s3cr3t")
        assert_eq!(
            compose_embedded_signature(Some("100"), Some("EUR"), Some("order-1"), &secret()),
            "FC273790237F6B5FD2560AA7DE4CA77973292BD5123FF17012F813F16F886128200F4529D91231D51C6649E9782C5DCE5A9B8E345B422B5B4F5014624942CED1"
        );
    }

    #[test]
    fn test_embedded_signature_defaults() {
        // Amount defaults to "0", currency and reference to empty: SHA-512("0s3cr3t")
        assert_eq!(
            compose_embedded_signature(None, None, None, &secret()),
            "72D233557D82FF60D3D8B1CB4A37C5A234E9A414F5DBFC1937A6F70AAA6A65ED1A47550600AF56E08B1905C2653691746B93D5B7AB38B26579C550A12CA88244"
        );
    }

    // ========================================================================
    // Comparison Tests
    // ========================================================================

    #[test]
    fn test_constant_time_compare_equal_strings() {
        assert!(constant_time_compare("ABC123", "ABC123"));
        assert!(constant_time_compare("", ""));
    }

    #[test]
    fn test_constant_time_compare_different_strings() {
        assert!(!constant_time_compare("ABC123", "ABC124"));
        assert!(!constant_time_compare("ABC", "ABCD"));
        assert!(!constant_time_compare("abc", "ABC"));
    }
}
