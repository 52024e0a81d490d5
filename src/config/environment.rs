//! Gateway environment URL tables.
//!
//! MakeCommerce operates separate production and test environments. All
//! environment URLs are derived once from the `test_mode` flag at
//! configuration build time and are immutable afterwards.

/// Production API base URL.
const API_URL: &str = "https://api.maksekeskus.ee";
/// Test API base URL.
const API_URL_TEST: &str = "https://api.test.maksekeskus.ee";

/// Production checkout widget asset base URL.
const CHECKOUT_JS_URL: &str = "https://payment.maksekeskus.ee/checkout/dist/";
/// Test checkout widget asset base URL.
const CHECKOUT_JS_URL_TEST: &str = "https://payment.test.maksekeskus.ee/checkout/dist/";

/// Production hosted payment gateway page.
const GATEWAY_URL: &str = "https://payment.maksekeskus.ee/pay/1/signed.html";
/// Test hosted payment gateway page.
const GATEWAY_URL_TEST: &str = "https://payment.test.maksekeskus.ee/pay/1/signed.html";

/// Production static asset base URL.
const STATICS_URL: &str = "https://static.maksekeskus.ee/";
/// Test static asset base URL.
const STATICS_URL_TEST: &str = "https://static-test.maksekeskus.ee/";

/// The set of gateway URLs for one environment.
///
/// Selected by the `test_mode` flag on the configuration builder. All URLs
/// are read-only after construction.
///
/// # Example
///
/// ```rust
/// use makecommerce_api::Environment;
///
/// let env = Environment::new(true);
/// assert_eq!(env.api(), "https://api.test.maksekeskus.ee");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    test_mode: bool,
}

impl Environment {
    /// Creates the environment URL table for the given mode.
    #[must_use]
    pub const fn new(test_mode: bool) -> Self {
        Self { test_mode }
    }

    /// Returns whether this is the test environment.
    #[must_use]
    pub const fn is_test(&self) -> bool {
        self.test_mode
    }

    /// Returns the REST API base URL.
    #[must_use]
    pub const fn api(&self) -> &'static str {
        if self.test_mode {
            API_URL_TEST
        } else {
            API_URL
        }
    }

    /// Returns the checkout widget asset base URL.
    #[must_use]
    pub const fn checkout_js(&self) -> &'static str {
        if self.test_mode {
            CHECKOUT_JS_URL_TEST
        } else {
            CHECKOUT_JS_URL
        }
    }

    /// Returns the hosted payment gateway page URL.
    #[must_use]
    pub const fn gateway(&self) -> &'static str {
        if self.test_mode {
            GATEWAY_URL_TEST
        } else {
            GATEWAY_URL
        }
    }

    /// Returns the static asset base URL.
    #[must_use]
    pub const fn statics(&self) -> &'static str {
        if self.test_mode {
            STATICS_URL_TEST
        } else {
            STATICS_URL
        }
    }
}
