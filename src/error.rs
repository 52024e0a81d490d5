//! Error types for the MakeCommerce API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use makecommerce_api::{ShopId, ConfigError};
//!
//! let result = ShopId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyShopId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop ID cannot be empty.
    #[error("Shop ID cannot be empty. Please provide the merchant shop UUID issued by MakeCommerce.")]
    EmptyShopId,

    /// Publishable key cannot be empty.
    #[error("Publishable key cannot be empty. Please provide the publishable key issued by MakeCommerce.")]
    EmptyPublishableKey,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide the secret key issued by MakeCommerce.")]
    EmptySecretKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API URL override is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
