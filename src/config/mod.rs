//! Configuration types for the MakeCommerce API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication and webhook verification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MakecommerceConfig`]: The main configuration struct holding all SDK settings
//! - [`MakecommerceConfigBuilder`]: A builder for constructing [`MakecommerceConfig`] instances
//! - [`ShopId`]: A validated shop ID newtype
//! - [`PublishableKey`]: A validated publishable key newtype
//! - [`SecretKey`]: A validated secret key newtype with masked debug output
//! - [`Environment`]: The derived production/test gateway URL table
//!
//! # Example
//!
//! ```rust
//! use makecommerce_api::{MakecommerceConfig, ShopId, PublishableKey, SecretKey};
//!
//! let config = MakecommerceConfig::builder()
//!     .shop_id(ShopId::new("my-shop-id").unwrap())
//!     .publishable_key(PublishableKey::new("my-publishable-key").unwrap())
//!     .secret_key(SecretKey::new("my-secret").unwrap())
//!     .test_mode(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment().api(), "https://api.test.maksekeskus.ee");
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{PublishableKey, SecretKey, ShopId};

use crate::error::ConfigError;

/// Configuration for the MakeCommerce API SDK.
///
/// This struct holds the merchant credentials and the derived environment
/// URL table. It is immutable after construction.
///
/// # Thread Safety
///
/// `MakecommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::{MakecommerceConfig, ShopId, PublishableKey, SecretKey};
///
/// let config = MakecommerceConfig::builder()
///     .shop_id(ShopId::new("shop-id").unwrap())
///     .publishable_key(PublishableKey::new("pub-key").unwrap())
///     .secret_key(SecretKey::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(!config.environment().is_test());
/// ```
#[derive(Clone, Debug)]
pub struct MakecommerceConfig {
    shop_id: ShopId,
    publishable_key: PublishableKey,
    secret_key: SecretKey,
    environment: Environment,
    api_url: Option<String>,
}

impl MakecommerceConfig {
    /// Creates a new builder for constructing a `MakecommerceConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use makecommerce_api::{MakecommerceConfig, ShopId, PublishableKey, SecretKey};
    ///
    /// let config = MakecommerceConfig::builder()
    ///     .shop_id(ShopId::new("shop-id").unwrap())
    ///     .publishable_key(PublishableKey::new("pub-key").unwrap())
    ///     .secret_key(SecretKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> MakecommerceConfigBuilder {
        MakecommerceConfigBuilder::new()
    }

    /// Returns the shop ID.
    #[must_use]
    pub const fn shop_id(&self) -> &ShopId {
        &self.shop_id
    }

    /// Returns the publishable key.
    #[must_use]
    pub const fn publishable_key(&self) -> &PublishableKey {
        &self.publishable_key
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the derived environment URL table.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the API base URL for outbound requests.
    ///
    /// This is the environment's API URL unless an override was configured
    /// via [`MakecommerceConfigBuilder::api_url`].
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| self.environment.api())
    }
}

// Verify MakecommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MakecommerceConfig>();
};

/// Builder for constructing [`MakecommerceConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required
/// fields are `shop_id`, `publishable_key`, and `secret_key`.
///
/// # Defaults
///
/// - `test_mode`: `false` (production environment)
/// - `api_url`: `None` (environment default)
///
/// # Example
///
/// ```rust
/// use makecommerce_api::{MakecommerceConfig, ShopId, PublishableKey, SecretKey};
///
/// let config = MakecommerceConfig::builder()
///     .shop_id(ShopId::new("shop-id").unwrap())
///     .publishable_key(PublishableKey::new("pub-key").unwrap())
///     .secret_key(SecretKey::new("secret").unwrap())
///     .test_mode(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MakecommerceConfigBuilder {
    shop_id: Option<ShopId>,
    publishable_key: Option<PublishableKey>,
    secret_key: Option<SecretKey>,
    test_mode: Option<bool>,
    api_url: Option<String>,
}

impl MakecommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop ID (required).
    #[must_use]
    pub fn shop_id(mut self, shop_id: ShopId) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    /// Sets the publishable key (required).
    #[must_use]
    pub fn publishable_key(mut self, key: PublishableKey) -> Self {
        self.publishable_key = Some(key);
        self
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Selects the test environment instead of production.
    #[must_use]
    pub const fn test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = Some(test_mode);
        self
    }

    /// Overrides the API base URL for outbound requests.
    ///
    /// Intended for proxies and test harnesses. The environment URL table
    /// is unaffected; only [`MakecommerceConfig::api_url`] changes.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Builds the [`MakecommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_id`,
    /// `publishable_key`, or `secret_key` are not set, and
    /// [`ConfigError::InvalidApiUrl`] if an `api_url` override lacks a scheme.
    pub fn build(self) -> Result<MakecommerceConfig, ConfigError> {
        let shop_id = self
            .shop_id
            .ok_or(ConfigError::MissingRequiredField { field: "shop_id" })?;
        let publishable_key = self
            .publishable_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "publishable_key",
            })?;
        let secret_key = self.secret_key.ok_or(ConfigError::MissingRequiredField {
            field: "secret_key",
        })?;

        if let Some(url) = &self.api_url {
            if !url.contains("://") {
                return Err(ConfigError::InvalidApiUrl { url: url.clone() });
            }
        }

        Ok(MakecommerceConfig {
            shop_id,
            publishable_key,
            secret_key,
            environment: Environment::new(self.test_mode.unwrap_or(false)),
            api_url: self.api_url,
        })
    }
}
