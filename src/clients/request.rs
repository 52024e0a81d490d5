//! API request types for the MakeCommerce API SDK.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! constructing requests against the gateway's REST surface.

use std::fmt;

/// HTTP methods supported by the gateway's REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// An API request to be sent to the payment gateway.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder
/// pattern. Query parameters are kept as an ordered list so the encoded URL
/// preserves insertion order. The body is optional for every method: POST
/// and PUT requests without one are sent bodiless, and a body set on a GET
/// request is ignored when sending.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::clients::{ApiRequest, ApiMethod};
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get_request = ApiRequest::builder(ApiMethod::Get, "/v1/transactions")
///     .query_param("since", "2024-01-01")
///     .build();
///
/// // POST request with JSON body
/// let post_request = ApiRequest::builder(ApiMethod::Post, "/v1/transactions")
///     .body(json!({"amount": "10.00", "currency": "EUR"}))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: ApiMethod,
    /// The path (relative to the API base URL) for this request.
    pub path: String,
    /// Ordered query parameters to append to the URL.
    pub query: Option<Vec<(String, String)>>,
    /// The JSON request body, if any. Only sent for POST and PUT.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `path` - The path (relative to the API base URL) for the request
    #[must_use]
    pub fn builder(method: ApiMethod, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`ApiRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: ApiMethod,
    path: String,
    query: Option<Vec<(String, String)>>,
    body: Option<serde_json::Value>,
}

impl ApiRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: ApiMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Sets all query parameters at once, preserving the given order.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}
