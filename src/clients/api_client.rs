//! Authenticated HTTP client for the gateway's REST API.
//!
//! This module provides the [`ApiClient`] type: one authenticated HTTPS call
//! per invocation, HTTP Basic credentials from the merchant configuration,
//! and a single-resolution JSON result.

use crate::clients::errors::ApiError;
use crate::clients::request::{ApiMethod, ApiRequest};
use crate::config::{MakecommerceConfig, SecretKey, ShopId};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the MakeCommerce API.
///
/// The client handles:
/// - URL construction from the configured environment's API base
/// - HTTP Basic authentication (username = shop ID, password = secret key)
/// - JSON content negotiation for request and response bodies
///
/// HTTP status codes are not inspected: any response that arrives resolves
/// with its parsed JSON body, and the gateway's error objects reach the
/// caller unchanged. Only transport failures reject. The client performs no
/// retries and imposes no timeout beyond transport defaults; callers wanting
/// cancellation wrap the returned future themselves.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync` and holds no mutable state; each call is
/// independent, so concurrent requests on one client need no coordination.
///
/// # Example
///
/// ```rust,ignore
/// use makecommerce_api::{ApiClient, MakecommerceConfig, ShopId, PublishableKey, SecretKey};
/// use makecommerce_api::clients::{ApiRequest, ApiMethod};
///
/// let config = MakecommerceConfig::builder()
///     .shop_id(ShopId::new("shop-id").unwrap())
///     .publishable_key(PublishableKey::new("pub-key").unwrap())
///     .secret_key(SecretKey::new("secret").unwrap())
///     .test_mode(true)
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(&config);
/// let request = ApiRequest::builder(ApiMethod::Get, "/v1/shop").build();
/// let shop = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API base URL (environment default or configured override).
    base_url: String,
    /// HTTP Basic username.
    shop_id: ShopId,
    /// HTTP Basic password and webhook signing secret.
    secret_key: SecretKey,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new API client from the merchant configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use makecommerce_api::{ApiClient, MakecommerceConfig, ShopId, PublishableKey, SecretKey};
    ///
    /// let config = MakecommerceConfig::builder()
    ///     .shop_id(ShopId::new("shop-id").unwrap())
    ///     .publishable_key(PublishableKey::new("pub-key").unwrap())
    ///     .secret_key(SecretKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ApiClient::new(&config);
    /// assert_eq!(client.base_url(), "https://api.maksekeskus.ee");
    /// ```
    #[must_use]
    pub fn new(config: &MakecommerceConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("MakeCommerce API Library v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_url().to_string(),
            shop_id: config.shop_id().clone(),
            secret_key: config.secret_key().clone(),
        }
    }

    /// Returns the API base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the shop ID used as the HTTP Basic username.
    #[must_use]
    pub const fn shop_id(&self) -> &ShopId {
        &self.shop_id
    }

    /// Sends an API request and resolves with the parsed JSON response body.
    ///
    /// The response status is not inspected: a non-2xx response with a JSON
    /// body still resolves, an empty body resolves to `{}`, and a non-JSON
    /// body resolves to a JSON string carrying the raw text. The request
    /// body is optional and sent only for POST and PUT; a body set on a GET
    /// request is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] for transport failures (DNS, TLS,
    /// connection, timeout).
    pub async fn request(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.build_url(&request);

        let mut req_builder = match request.method {
            ApiMethod::Get => self.client.get(&url),
            ApiMethod::Post => self.client.post(&url),
            ApiMethod::Put => self.client.put(&url),
        };

        req_builder = req_builder
            .basic_auth(self.shop_id.as_ref(), Some(self.secret_key.as_ref()))
            .header("Accept", "application/json");

        if request.method != ApiMethod::Get {
            if let Some(body) = &request.body {
                req_builder = req_builder.json(body);
            }
        }

        tracing::debug!(method = %request.method, url = %url, "sending API request");

        let res = req_builder.send().await?;
        let body_text = res.text().await?;

        if body_text.is_empty() {
            return Ok(serde_json::json!({}));
        }
        Ok(serde_json::from_str(&body_text)
            .unwrap_or(serde_json::Value::String(body_text)))
    }

    /// Builds the full request URL from the base, path, and encoded query.
    fn build_url(&self, request: &ApiRequest) -> String {
        let mut url = format!("{}{}", self.base_url, request.path);
        if let Some(query) = &request.query {
            for (key, value) in query {
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&urlencoding::encode(key));
                url.push('=');
                url.push_str(&urlencoding::encode(value));
            }
        }
        url
    }
}
