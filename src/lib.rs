//! # MakeCommerce API Rust SDK
//!
//! A Rust SDK for the MakeCommerce (Maksekeskus) hosted payment gateway,
//! providing type-safe configuration, webhook signature verification, and
//! an authenticated HTTP client for the gateway's REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MakecommerceConfig`] and [`MakecommerceConfigBuilder`]
//! - Validated newtypes for merchant credentials
//! - Production/test environment URL tables derived from a single flag
//! - Webhook signature and MAC verification via [`webhooks`]
//! - Async HTTP client with HTTP Basic authentication via [`clients`]
//!
//! ## Quick Start
//!
//! ```rust
//! use makecommerce_api::{MakecommerceConfig, ShopId, PublishableKey, SecretKey};
//!
//! // Create configuration using the builder pattern
//! let config = MakecommerceConfig::builder()
//!     .shop_id(ShopId::new("your-shop-id").unwrap())
//!     .publishable_key(PublishableKey::new("your-publishable-key").unwrap())
//!     .secret_key(SecretKey::new("your-secret-key").unwrap())
//!     .test_mode(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment().api(), "https://api.test.maksekeskus.ee");
//! ```
//!
//! ## Verifying Webhook Callbacks
//!
//! The gateway delivers webhook callbacks as an envelope wrapping a
//! serialized payload. Verify the signature or MAC before trusting it:
//!
//! ```rust
//! use makecommerce_api::webhooks::{verify_signature, verify_mac, WebhookEnvelope};
//! use makecommerce_api::SecretKey;
//!
//! let secret = SecretKey::new("your-secret-key").unwrap();
//!
//! // Parsed from the callback request parameters
//! let envelope: WebhookEnvelope = serde_json::from_str(
//!     r#"{"json": "{\"amount\": 10, \"status\": \"PAID\"}"}"#,
//! ).unwrap();
//!
//! if verify_signature(&envelope, &secret) || verify_mac(&envelope, &secret) {
//!     // Trust the payload
//! } else {
//!     // Reject the callback
//! }
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use makecommerce_api::ApiClient;
//! use serde_json::json;
//!
//! let client = ApiClient::new(&config);
//!
//! let shop = client.get_shop().await?;
//!
//! let transaction = client.create_transaction(json!({
//!     "transaction": {"amount": "10.00", "currency": "EUR", "reference": "order-1"},
//!     "customer": {"country": "ee", "locale": "et"},
//! })).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Verification never throws**: malformed webhook input degrades to `false`

pub mod clients;
pub mod config;
pub mod error;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{
    Environment, MakecommerceConfig, MakecommerceConfigBuilder, PublishableKey, SecretKey, ShopId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{ApiClient, ApiError, ApiMethod, ApiRequest};

// Re-export webhook verification types for convenience
pub use webhooks::{
    verify_mac, verify_signature, SignatureType, WebhookEnvelope, WebhookError,
};
