//! HTTP-specific error types for the MakeCommerce API SDK.
//!
//! # Error Handling
//!
//! Only the transport can fail at this layer: [`ApiError::Network`] covers
//! DNS, TLS, connection, and timeout failures.
//!
//! Non-2xx HTTP responses are not errors: the gateway reports application
//! failures in the JSON body, which the client hands back to the caller
//! unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use makecommerce_api::clients::ApiError;
//!
//! match client.request(request).await {
//!     Ok(body) => println!("Response: {body}"),
//!     Err(ApiError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_network_error_message_is_prefixed() {
        // An unroutable request is the simplest way to obtain a reqwest::Error
        let err = reqwest::get("http://127.0.0.1:1").await.unwrap_err();
        let api_error = ApiError::from(err);
        assert!(api_error.to_string().starts_with("Network error:"));
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<ApiError>();
    }
}
