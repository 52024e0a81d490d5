//! Integration tests for the API client.
//!
//! These tests run against a local mock server and verify authentication,
//! URL construction, status-agnostic resolution, and transport error
//! handling.

use makecommerce_api::clients::{ApiMethod, ApiRequest};
use makecommerce_api::{ApiClient, ApiError, MakecommerceConfig, PublishableKey, SecretKey, ShopId};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the given API base URL.
fn create_test_config(api_url: &str) -> MakecommerceConfig {
    MakecommerceConfig::builder()
        .shop_id(ShopId::new("test-shop").unwrap())
        .publishable_key(PublishableKey::new("test-pub-key").unwrap())
        .secret_key(SecretKey::new("test-secret").unwrap())
        .test_mode(true)
        .api_url(api_url)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_request_resolves_with_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/shop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Test Shop"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let body = client.get_shop().await.unwrap();

    assert_eq!(body, json!({"name": "Test Shop"}));
}

#[tokio::test]
async fn test_requests_carry_basic_auth_credentials() {
    let server = MockServer::start().await;
    // base64("test-shop:test-secret")
    Mock::given(method("GET"))
        .and(path("/v1/shop"))
        .and(header(
            "Authorization",
            "Basic dGVzdC1zaG9wOnRlc3Qtc2VjcmV0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    client.get_shop().await.unwrap();
}

#[tokio::test]
async fn test_query_parameters_are_encoded_into_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .and(query_param("since", "2024-01-01"))
        .and(query_param("status", "PAID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transactions": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let body = client
        .get_transactions(vec![
            ("since".to_string(), "2024-01-01".to_string()),
            ("status".to_string(), "PAID".to_string()),
        ])
        .await
        .unwrap();

    assert_eq!(body, json!({"transactions": []}));
}

#[tokio::test]
async fn test_post_request_sends_json_body() {
    let server = MockServer::start().await;
    let transaction = json!({
        "transaction": {"amount": "10.00", "currency": "EUR", "reference": "order-1"}
    });
    Mock::given(method("POST"))
        .and(path("/v1/transactions"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&transaction))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "txn-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let body = client.create_transaction(transaction.clone()).await.unwrap();

    assert_eq!(body, json!({"id": "txn-1"}));
}

#[tokio::test]
async fn test_put_request_via_generic_primitive() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/shop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let request = ApiRequest::builder(ApiMethod::Put, "/v1/shop")
        .body(json!({"name": "Renamed"}))
        .build();
    let body = client.request(request).await.unwrap();

    assert_eq!(body, json!({"updated": true}));
}

#[tokio::test]
async fn test_post_without_body_is_sent_bodiless() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/transactions"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "txn-2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let request = ApiRequest::builder(ApiMethod::Post, "/v1/transactions").build();
    let body = client.request(request).await.unwrap();

    assert_eq!(body, json!({"id": "txn-2"}));
}

#[tokio::test]
async fn test_get_with_body_ignores_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/shop"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Test Shop"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let request = ApiRequest::builder(ApiMethod::Get, "/v1/shop")
        .body(json!({"ignored": true}))
        .build();
    let body = client.request(request).await.unwrap();

    assert_eq!(body, json!({"name": "Test Shop"}));
}

#[tokio::test]
async fn test_non_2xx_response_still_resolves_with_body() {
    let server = MockServer::start().await;
    let error_body = json!({"code": 1003, "message": "Invalid transaction amount"});
    Mock::given(method("POST"))
        .and(path("/v1/transactions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let body = client
        .create_transaction(json!({"transaction": {}}))
        .await
        .unwrap();

    // HTTP status is not inspected; the gateway's error object reaches the caller
    assert_eq!(body, error_body);
}

#[tokio::test]
async fn test_empty_response_body_resolves_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/shop"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let body = client.get_shop().await.unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_non_json_response_body_resolves_to_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/shop"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let body = client.get_shop().await.unwrap();

    assert_eq!(body, json!("Bad Gateway"));
}

#[tokio::test]
async fn test_unreachable_host_rejects_with_transport_error() {
    // Port 1 is never listening locally
    let client = ApiClient::new(&create_test_config("http://127.0.0.1:1"));
    let result = client.get_shop().await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_concurrent_requests_on_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/shop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Test Shop"})))
        .expect(3)
        .mount(&server)
        .await;

    let client = ApiClient::new(&create_test_config(&server.uri()));
    let (a, b, c) = tokio::join!(client.get_shop(), client.get_shop(), client.get_shop());

    assert_eq!(a.unwrap(), json!({"name": "Test Shop"}));
    assert_eq!(b.unwrap(), json!({"name": "Test Shop"}));
    assert_eq!(c.unwrap(), json!({"name": "Test Shop"}));
}
