//! Thin endpoint wrappers over the authenticated request primitive.
//!
//! Each wrapper supplies a method and path and forwards parameters to
//! [`ApiClient::request`]; none of them interpret the payload. Query
//! parameters are ordered key/value pairs; bodies are raw JSON values whose
//! field semantics are defined by the gateway's API documentation.

use crate::clients::api_client::ApiClient;
use crate::clients::errors::ApiError;
use crate::clients::request::{ApiMethod, ApiRequest};

/// Ordered query parameters for list and lookup endpoints.
pub type QueryParams = Vec<(String, String)>;

impl ApiClient {
    async fn get(&self, path: impl Into<String>, params: QueryParams) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest::builder(ApiMethod::Get, path).query(params).build();
        self.request(request).await
    }

    async fn post(&self, path: impl Into<String>, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest::builder(ApiMethod::Post, path).body(body).build();
        self.request(request).await
    }

    /// Fetches the shop details.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_shop(&self) -> Result<serde_json::Value, ApiError> {
        self.get("/v1/shop", QueryParams::new()).await
    }

    /// Fetches the shop configuration for an environment description.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_shop_config(&self, params: QueryParams) -> Result<serde_json::Value, ApiError> {
        self.get("/v1/shop/configuration", params).await
    }

    /// Updates the shop details.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn update_shop(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/shop", body).await
    }

    /// Creates a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_transaction(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/transactions", body).await
    }

    /// Attaches metadata to a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn add_transaction_meta(
        &self,
        transaction_id: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.post(format!("/v1/transactions/{transaction_id}/addMeta"), body)
            .await
    }

    /// Fetches a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<serde_json::Value, ApiError> {
        self.get(format!("/v1/transactions/{transaction_id}"), QueryParams::new())
            .await
    }

    /// Lists transactions matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_transactions(&self, params: QueryParams) -> Result<serde_json::Value, ApiError> {
        self.get("/v1/transactions", params).await
    }

    /// Creates a payment token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_token(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/tokens", body).await
    }

    /// Creates a payment on a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_payment(
        &self,
        transaction_id: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.post(format!("/v1/transactions/{transaction_id}/payments"), body)
            .await
    }

    /// Creates a refund on a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_refund(
        &self,
        transaction_id: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.post(format!("/v1/transactions/{transaction_id}/refunds"), body)
            .await
    }

    /// Fetches a single refund.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_refund(&self, refund_id: &str) -> Result<serde_json::Value, ApiError> {
        self.get(format!("/v1/refunds/{refund_id}"), QueryParams::new())
            .await
    }

    /// Lists refunds matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_refunds(&self, params: QueryParams) -> Result<serde_json::Value, ApiError> {
        self.get("/v1/refunds", params).await
    }

    /// Lists the payment methods available for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_payment_methods(&self, params: QueryParams) -> Result<serde_json::Value, ApiError> {
        self.get("/v1/methods", params).await
    }

    /// Lists shipment destinations for the given carriers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_destinations(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/shipments/destinations", body).await
    }

    /// Registers shipments at the carrier systems.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_shipments(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/shipments", body).await
    }

    /// Lists the supported shipment label formats.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn get_label_formats(&self) -> Result<serde_json::Value, ApiError> {
        self.get("/v1/shipments/labels/formats", QueryParams::new())
            .await
    }

    /// Generates shipment labels for registered shipments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_labels(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/shipments/createlabels", body).await
    }

    /// Creates an SDK cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure.
    pub async fn create_cart(&self, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.post("/v1/carts", body).await
    }
}
