//! Tests for the HTTP module

use super::*;
use crate::error::Error;
use crate::types::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .access_token("test-token")
        .build();
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Request Descriptor Tests
// ============================================================================

#[test]
fn test_request_descriptor_builder() {
    let request = RequestDescriptor::get("/me/tracks")
        .query("limit", 20)
        .query_opt("market", Some("SE"))
        .query_opt::<&str>("offset", None)
        .header("X-Request-Id", "abc123");

    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/me/tracks");
    assert_eq!(
        request.query,
        vec![
            ("limit".to_string(), "20".to_string()),
            ("market".to_string(), "SE".to_string()),
        ]
    );
    assert_eq!(request.query_value("market").as_deref(), Some("SE"));
    assert_eq!(
        request.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(request.body.is_none());
}

#[test]
fn test_retarget_absolute_url() {
    let original = RequestDescriptor::get("/me/tracks")
        .query("limit", 20)
        .header("Accept-Language", "sv");

    let next = original.retarget("https://api.example/v1/things?offset=20&limit=20");

    assert_eq!(next.method, Method::GET);
    assert_eq!(next.path, "https://api.example/v1/things");
    assert_eq!(next.query_value("offset").as_deref(), Some("20"));
    assert_eq!(next.query_value("limit").as_deref(), Some("20"));
    assert_eq!(next.headers, original.headers);

    // The original is untouched
    assert_eq!(original.path, "/me/tracks");
    assert_eq!(original.query.len(), 1);
}

#[test]
fn test_retarget_keeps_method_and_body() {
    let original = RequestDescriptor::post("/search").json(json!({"q": "x"}));
    let next = original.retarget("/search?page=2#frag");

    assert_eq!(next.method, Method::POST);
    assert_eq!(next.body, Some(json!({"q": "x"})));
    assert_eq!(next.path, "/search");
    assert!(next.query.is_empty());
    assert_eq!(next.raw_query.as_deref(), Some("page=2"));
    assert_eq!(next.target(), "/search?page=2");
}

#[test]
fn test_retarget_decodes_query() {
    let next = RequestDescriptor::get("/search").retarget("/search?q=daft%20punk&type=track");
    assert_eq!(next.query_value("q").as_deref(), Some("daft punk"));
}

#[test]
fn test_request_options_builder() {
    let options = RequestOptions::new()
        .base_url("https://example.com")
        .timeout(Duration::from_secs(5))
        .header("X-Trace", "1");

    assert_eq!(options.base_url.as_deref(), Some("https://example.com"));
    assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    assert_eq!(options.headers.get("X-Trace"), Some(&"1".to_string()));
}

#[test]
fn test_raw_response_helpers() {
    let response = RawResponse::new(200, "  \n").with_header("Content-Type", "text/plain");
    assert!(response.is_empty());
    assert!(response.is_success());
    assert_eq!(response.header("content-type"), Some("text/plain"));

    assert!(RawResponse::no_content().is_empty());
    assert!(!RawResponse::new(404, "{}").is_success());
    assert_eq!(RawResponse::json(&json!({"a": 1})).text(), r#"{"a":1}"#);
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.access_token.is_none());
    assert!(config.user_agent.starts_with("spotify-web-sdk/"));
}

#[test]
fn test_http_client_config_debug_hides_token() {
    let config = HttpClientConfig::builder().access_token("secret").build();
    let debug = format!("{config:?}");
    assert!(!debug.contains("secret"));
    assert!(debug.contains("has_access_token: true"));
}

#[test]
fn test_build_url() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("https://api.spotify.com/v1/")
            .build(),
    )
    .unwrap();
    let options = RequestOptions::new();

    assert_eq!(
        client.build_url("/me", &options),
        "https://api.spotify.com/v1/me"
    );
    assert_eq!(
        client.build_url("https://other.example/x", &options),
        "https://other.example/x"
    );
    assert_eq!(
        client.build_url("me", &RequestOptions::new().base_url("http://localhost:1234")),
        "http://localhost:1234/me"
    );
}

#[tokio::test]
async fn test_execute_sends_bearer_query_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .and(query_param("limit", "2"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("X-Option", "opt"))
        .and(header("X-Request", "req"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = RequestDescriptor::get("/me/tracks")
        .query("limit", 2)
        .header("X-Request", "req");
    let options = RequestOptions::new().header("X-Option", "opt");

    let response = client.execute(&request, &options).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.text(), r#"{"items":[]}"#);
}

#[tokio::test]
async fn test_execute_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/me/tracks"))
        .and(body_json(json!({"ids": ["a", "b"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = RequestDescriptor::put("/me/tracks").json(json!({"ids": ["a", "b"]}));

    let response = client
        .execute(&request, &RequestOptions::new())
        .await
        .unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_execute_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/me/player/pause"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .execute(&RequestDescriptor::put("/me/player/pause"), &RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_execute_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/albums/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"status": 404, "message": "Not found"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .execute(&RequestDescriptor::get("/albums/missing"), &RequestOptions::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Not found"));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_does_not_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .execute(&RequestDescriptor::get("/flaky"), &RequestOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_execute_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = RequestOptions::new().timeout(Duration::from_millis(50));
    let err = client
        .execute(&RequestDescriptor::get("/slow"), &options)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_execute_absolute_url_ignores_base() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/next"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("http://unused.invalid")
            .build(),
    )
    .unwrap();
    let request = RequestDescriptor::get("/ignored")
        .retarget(&format!("{}/v1/next?offset=20", server.uri()));

    let response = client
        .execute(&request, &RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(response.text(), "{}");
}

#[tokio::test]
async fn test_request_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": 42})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data: serde_json::Value = client
        .request_json(&RequestDescriptor::get("/data"), &RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_execute_sends_cursor_url_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cursor = format!(
        "{}/v1/search?query=a%20b%3Ac&type=track%2Cartist&flag&offset=20",
        server.uri()
    );
    let request = RequestDescriptor::get("/search")
        .query("q", "ignored")
        .retarget(&cursor);

    client
        .execute(&request, &RequestOptions::new())
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("query=a%20b%3Ac&type=track%2Cartist&flag&offset=20")
    );
}

// ============================================================================
// MockTransport Tests
// ============================================================================

#[tokio::test]
async fn test_mock_transport_scripts_and_records() {
    let transport = MockTransport::new();
    transport
        .respond_json("/a?limit=1", json!({"ok": true}))
        .fail("/b", 500, "boom");

    let ok = transport
        .execute(
            &RequestDescriptor::get("/a").query("limit", 1),
            &RequestOptions::new(),
        )
        .await
        .unwrap();
    assert_eq!(ok.text(), r#"{"ok":true}"#);

    let err = transport
        .execute(&RequestDescriptor::get("/b"), &RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));

    let missing = transport
        .execute(&RequestDescriptor::get("/c"), &RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(missing.status(), Some(404));

    assert_eq!(transport.calls(), 3);
    assert_eq!(transport.requests()[0].0.path, "/a");
}

#[test]
fn test_request_target() {
    let request = RequestDescriptor::get("/search")
        .query("q", "a b")
        .query("type", "track");
    assert_eq!(request.target(), "/search?q=a+b&type=track");
    assert_eq!(RequestDescriptor::get("/me").target(), "/me");
}

#[test]
fn test_retargeted_query_kept_verbatim() {
    let next = RequestDescriptor::get("/search")
        .query("limit", 5)
        .retarget("/search?query=a%20b%3Ac&type=track%2Cartist&flag&offset=20");

    assert_eq!(
        next.target(),
        "/search?query=a%20b%3Ac&type=track%2Cartist&flag&offset=20"
    );
    assert_eq!(next.query_value("query").as_deref(), Some("a b:c"));
    assert_eq!(next.query_value("flag").as_deref(), Some(""));

    // Pairs added afterwards follow the cursor query
    let extended = next.query("market", "SE");
    assert_eq!(
        extended.query_string().as_deref(),
        Some("query=a%20b%3Ac&type=track%2Cartist&flag&offset=20&market=SE")
    );
}
