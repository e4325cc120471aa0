//! Integration tests for the `reqwest` transport.
//!
//! These tests run the adapter against a local mock server and verify
//! headers, body encoding, response decoding and error mapping.

use habrahabr_api::clients::{FormParams, HttpAdapter, HttpMethod, HttpRequest};
use habrahabr_api::{
    ApiToken, ClientId, Endpoint, HabrConfig, HttpError, NetworkError, ReqwestAdapter,
};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an adapter pointed at `{base}/v1`.
fn create_adapter(base: &str) -> ReqwestAdapter {
    let config = HabrConfig::builder()
        .client_id(ClientId::new("test-client").unwrap())
        .token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new(format!("{base}/v1")).unwrap())
        .build()
        .unwrap();
    ReqwestAdapter::new(&config).unwrap()
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_auth_headers_are_sent_with_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .and(header("client", "test-client"))
        .and(header("token", "test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"login": "me"}})))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let response = adapter.get("/users/me").await.unwrap();

    assert_eq!(response.body(), Some(&json!({"data": {"login": "me"}})));
}

#[tokio::test]
async fn test_query_string_in_path_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/companies"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    adapter.get("/companies?page=3").await.unwrap();
}

#[tokio::test]
async fn test_put_sends_form_encoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/comments/42"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("text=Hello%20world&parent_id=0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let params = FormParams::new()
        .with("text", "Hello world")
        .with("parent_id", 0_u64);
    let response = adapter.put("/comments/42", params).await.unwrap();

    assert_eq!(response.body(), Some(&json!({"ok": true})));
}

#[tokio::test]
async fn test_list_params_use_bracketed_keys() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/things"))
        .and(body_string("ids%5B0%5D=1&ids%5B1%5D=2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let params = FormParams::new().with("ids", vec![1_u64, 2_u64]);
    adapter.post("/things", params).await.unwrap();
}

#[tokio::test]
async fn test_get_never_sends_a_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tracker/counters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "/tracker/counters")
        .param("ignored", "value")
        .build()
        .unwrap();
    let response = adapter.send(request).await.unwrap();
    assert_eq!(response.code, 200);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_without_params_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/hub/rust"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    adapter.delete("/hub/rust", FormParams::new()).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_drops_params() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/users/favorites/posts/42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    adapter
        .delete("/users/favorites/posts/42", FormParams::new().with("x", "1"))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

// ============================================================================
// Response Decoding
// ============================================================================

#[tokio::test]
async fn test_empty_body_decodes_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/posts/7/viewcount"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let response = adapter
        .put("/posts/7/viewcount", FormParams::new())
        .await
        .unwrap();

    assert!(response.is_empty());
    assert_eq!(response.body(), None);
}

#[tokio::test]
async fn test_response_headers_are_lowercased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feed/best"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "/feed/best")
        .build()
        .unwrap();
    let response = adapter.send(request).await.unwrap();

    assert_eq!(response.header("x-request-id"), Some("abc"));
    assert_eq!(response.header("X-REQUEST-ID"), Some("abc"));
}

#[tokio::test]
async fn test_invalid_json_on_success_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let result = adapter.get("/users/me").await;

    assert!(matches!(result, Err(HttpError::Parse(_))));
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_error_status_is_api_error_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/ghost"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"code": 404, "message": "Not Found"})),
        )
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let result = adapter.get("/users/ghost").await;

    match result {
        Err(HttpError::Api(error)) => {
            assert_eq!(error.code, 404);
            assert_eq!(error.message, "Not Found");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_with_plain_text_body_keeps_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feed/all"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let result = adapter.get("/feed/all").await;

    match result {
        Err(HttpError::Api(error)) => {
            assert_eq!(error.code, 503);
            assert_eq!(error.message, "Service Unavailable");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_send_returns_error_statuses_as_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let adapter = create_adapter(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "/users/ghost")
        .build()
        .unwrap();
    let response = adapter.send(request).await.unwrap();

    assert_eq!(response.code, 404);
    assert!(!response.is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let adapter = create_adapter("http://127.0.0.1:1");
    let result = adapter.get("/users/me").await;

    match result {
        Err(HttpError::Network(error)) => {
            assert_eq!(error.code, NetworkError::CONNECT);
            assert!(!error.message.is_empty());
        }
        other => panic!("expected NetworkError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_total_timeout_from_custom_builder_is_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = HabrConfig::builder()
        .client_id(ClientId::new("c").unwrap())
        .token(ApiToken::new("t").unwrap())
        .endpoint(Endpoint::new(format!("{}/v1", server.uri())).unwrap())
        .build()
        .unwrap();
    let builder = reqwest::Client::builder().timeout(Duration::from_millis(100));
    let adapter = ReqwestAdapter::with_client_builder(&config, builder).unwrap();

    let result = adapter.get("/users/me").await;

    match result {
        Err(HttpError::Network(error)) => assert_eq!(error.code, NetworkError::TIMEOUT),
        other => panic!("expected NetworkError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_path_never_reaches_the_network() {
    let adapter = create_adapter("http://127.0.0.1:1");
    let result = adapter.get("https://evil.example/users").await;

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let server = MockServer::start().await;
    let other_host = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/collect", other_host.uri()).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"from": "other host"})))
        .expect(0)
        .mount(&other_host)
        .await;

    let adapter = create_adapter(&server.uri());
    let result = adapter.get("/users/me").await;

    match result {
        Err(HttpError::Api(error)) => assert_eq!(error.code, 302),
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert!(other_host.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_configured_connect_timeout_bounds_unreachable_host() {
    // 10.255.255.1 is non-routable: the connect either hangs or is refused.
    let config = HabrConfig::builder()
        .client_id(ClientId::new("c").unwrap())
        .token(ApiToken::new("t").unwrap())
        .endpoint(Endpoint::new("http://10.255.255.1/v1").unwrap())
        .connect_timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let adapter = ReqwestAdapter::new(&config).unwrap();

    let started = Instant::now();
    let result = adapter.get("/users/me").await;

    match result {
        Err(HttpError::Network(error)) => assert!(
            error.code == NetworkError::TIMEOUT || error.code == NetworkError::CONNECT,
            "unexpected code {}",
            error.code
        ),
        other => panic!("expected NetworkError, got {other:?}"),
    }
    assert!(started.elapsed() < Duration::from_secs(5));
}
