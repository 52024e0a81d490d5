//! Validated newtype wrappers for merchant credentials.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated MakeCommerce shop ID.
///
/// This newtype ensures the shop ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings. The shop ID doubles as the
/// HTTP Basic username for API calls.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::ShopId;
///
/// let shop_id = ShopId::new("f7741ab2-7445-45f9-9af4-0d0408ef1e4c").unwrap();
/// assert_eq!(shop_id.as_ref(), "f7741ab2-7445-45f9-9af4-0d0408ef1e4c");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopId(String);

impl ShopId {
    /// Creates a new validated shop ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyShopId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ShopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated MakeCommerce publishable key.
///
/// The publishable key identifies the shop in client-side contexts such as
/// the checkout widget. It is not secret.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::PublishableKey;
///
/// let key = PublishableKey::new("my-publishable-key").unwrap();
/// assert_eq!(key.as_ref(), "my-publishable-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishableKey(String);

impl PublishableKey {
    /// Creates a new validated publishable key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublishableKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPublishableKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublishableKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated MakeCommerce secret key.
///
/// This newtype ensures the secret key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs. The secret key
/// is used as the keyed-hash input for webhook MAC verification and as the
/// HTTP Basic password for API calls; it must never leave the process in
/// any other form.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}
