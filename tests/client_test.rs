//! HTTP client core integration tests
//!
//! Exercises token injection, status mapping, and error-body handling
//! against a mock server.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use lockhaven_client::{ApiError, AuthPolicy, MemoryTokenStore, TokenStore};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, RecordingNavigator};

#[tokio::test]
async fn test_bearer_header_attached_exactly_once_when_token_stored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save("token-123");
    let client = client_for(&server.uri(), store);

    let _: serde_json::Value = client.get_json("/auth/profile").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let auth_values: Vec<_> = requests[0].headers.get_all("authorization").iter().collect();
    assert_eq!(auth_values.len(), 1);
    assert_eq!(auth_values[0].to_str().unwrap(), "Bearer token-123");
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "no"})))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let _: serde_json::Value = client
        .post_json("/auth/login", &json!({"email": "a@b.com", "password": "x"}))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_token_read_at_call_time_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_for(&server.uri(), store.clone());

    let _: serde_json::Value = client.get_json("/files").await.unwrap();
    store.save("late-token");
    let _: serde_json::Value = client.get_json("/files").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").unwrap().to_str().unwrap(),
        "Bearer late-token"
    );
}

#[tokio::test]
async fn test_json_requests_carry_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let _: serde_json::Value = client
        .post_json("/auth/login", &json!({"email": "a@b.com", "password": "x"}))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap();
    assert_eq!(content_type.to_str().unwrap(), "application/json");
}

#[tokio::test]
async fn test_401_maps_to_authentication_required_regardless_of_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let result: Result<serde_json::Value, _> = client.get_json("/auth/profile").await;

    assert_matches!(result, Err(ApiError::AuthenticationRequired));
}

#[tokio::test]
async fn test_401_through_policy_clears_token_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(401).set_body_string("whatever"))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.save("stale");
    let client = client_for(&server.uri(), store.clone());
    let navigator = Arc::new(RecordingNavigator::default());
    let policy = AuthPolicy::new(client.store(), navigator.clone());

    let result: Result<serde_json::Value, _> = policy.check(client.get_json("/files").await);

    assert_matches!(result, Err(ApiError::AuthenticationRequired));
    assert!(store.load().is_none());
    assert_eq!(navigator.visited(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_non_2xx_json_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Email already registered"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let result: Result<serde_json::Value, _> =
        client.post_json("/auth/register", &json!({})).await;

    match result {
        Err(ApiError::Http { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email already registered");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_degrades_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>unavailable</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let result: Result<serde_json::Value, _> = client.get_json("/files").await;

    match result {
        Err(ApiError::Http { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "HTTP 503");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_json_error_body_without_message_field_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let result: Result<serde_json::Value, _> = client.get_json("/files").await;

    match result {
        Err(ApiError::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP 500");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_success_body_decoded_as_caller_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok",
            "user": {"id": "1", "email": "a@b.com", "firstName": "Ada", "lastName": "Lovelace"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let response: lockhaven_client::AuthResponse = client.get_json("/auth/profile").await.unwrap();

    assert!(response.success);
    assert_eq!(response.user.unwrap().first_name, "Ada");
}

#[tokio::test]
async fn test_undecodable_success_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri(), Arc::new(MemoryTokenStore::new()));
    let result: Result<lockhaven_client::AuthResponse, _> = client.get_json("/auth/profile").await;

    assert_matches!(result, Err(ApiError::Serialization(_)));
}
