//! HTTP client types for MakeCommerce API communication.
//!
//! This module provides the authenticated HTTP layer for the gateway's REST
//! surface, plus the thin endpoint wrappers built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: the async HTTP client for API communication
//! - [`ApiRequest`]: a request to be sent to the API
//! - [`ApiMethod`]: supported HTTP methods (GET, POST, PUT)
//! - [`ApiError`]: client error type (transport failures only)
//!
//! # Example
//!
//! ```rust,ignore
//! use makecommerce_api::{ApiClient, MakecommerceConfig, ShopId, PublishableKey, SecretKey};
//! use makecommerce_api::clients::{ApiRequest, ApiMethod};
//!
//! let config = MakecommerceConfig::builder()
//!     .shop_id(ShopId::new("shop-id").unwrap())
//!     .publishable_key(PublishableKey::new("pub-key").unwrap())
//!     .secret_key(SecretKey::new("secret").unwrap())
//!     .test_mode(true)
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(&config);
//!
//! // The generic primitive...
//! let request = ApiRequest::builder(ApiMethod::Get, "/v1/shop").build();
//! let shop = client.request(request).await?;
//!
//! // ...or the endpoint wrappers built on it
//! let methods = client.get_payment_methods(vec![
//!     ("amount".to_string(), "10.00".to_string()),
//!     ("currency".to_string(), "EUR".to_string()),
//! ]).await?;
//! ```
//!
//! # Failure Model
//!
//! Only transport failures reject. HTTP status codes are not inspected, so
//! the gateway's application-level error bodies resolve like any other
//! response and the caller decides what to do with them. The client retries
//! nothing and imposes no timeout beyond transport defaults.

mod api_client;
mod endpoints;
mod errors;
mod request;

pub use api_client::{ApiClient, SDK_VERSION};
pub use endpoints::QueryParams;
pub use errors::ApiError;
pub use request::{ApiMethod, ApiRequest, ApiRequestBuilder};
