//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> HttpClient {
    let config = HttpClientConfig::builder().no_rate_limit().build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("shopify-graphql-node/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .rate_limit(RateLimiterConfig::new(4, 2))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(4, 2)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");

    let client = HttpClient::with_config(config).unwrap();
    assert!(client.has_rate_limiter());
}

#[tokio::test]
async fn test_post_json_sends_body_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/api/2024-10/graphql.json"))
        .and(header("X-Shopify-Access-Token", "shpat_abc"))
        .and(body_json(json!({"query": "{ shop { name } }", "variables": {}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"shop": {"name": "Acme"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = HashMap::new();
    headers.insert("X-Shopify-Access-Token".to_string(), "shpat_abc".to_string());

    let url = format!("{}/admin/api/2024-10/graphql.json", mock_server.uri());
    let body = json!({"query": "{ shop { name } }", "variables": {}});
    let response = test_client().post_json(&url, &headers, &body).await.unwrap();

    assert_eq!(response["data"]["shop"]["name"], "Acme");
}

#[tokio::test]
async fn test_default_headers_applied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Request-Source", "workflow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-Request-Source", "workflow")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    client
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_graphql_errors_are_not_transport_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Throttled"}]
        })))
        .mount(&mock_server)
        .await;

    let response = test_client()
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap();
    assert_eq!(response["errors"][0]["message"], "Throttled");
}

#[tokio::test]
async fn test_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"errors":"[API] Invalid API key or access token"}"#),
        )
        .mount(&mock_server)
        .await;

    let err = test_client()
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client()
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_connection_refused() {
    // Port 9 (discard) is closed on test machines
    let err = test_client()
        .post_json("http://127.0.0.1:9/graphql", &HashMap::new(), &json!({}))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = test_client()
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_transport_trait_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .mount(&mock_server)
        .await;

    let transport: Box<dyn Transport> = Box::new(test_client());
    let response = transport
        .post_json(&mock_server.uri(), &HashMap::new(), &json!({}))
        .await
        .unwrap();
    assert_eq!(response["data"]["ok"], true);
}
