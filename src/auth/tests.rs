//! Tests for auth module

use super::*;
use crate::Error;
use std::collections::HashMap;
use test_case::test_case;

// ============================================================================
// Credential Tests
// ============================================================================

#[test]
fn test_default_endpoint() {
    let creds = ShopifyCredentials::new("acme", "shpat_123");
    assert_eq!(creds.api_version, DEFAULT_API_VERSION);
    assert_eq!(
        creds.graphql_url().unwrap(),
        "https://acme.myshopify.com/admin/api/2024-10/graphql.json"
    );
}

#[test]
fn test_pinned_api_version() {
    let creds = ShopifyCredentials::new("acme", "shpat_123").with_api_version("2023-07");
    assert_eq!(
        creds.graphql_url().unwrap(),
        "https://acme.myshopify.com/admin/api/2023-07/graphql.json"
    );
}

#[test_case("acme" ; "bare name")]
#[test_case("acme.myshopify.com" ; "with domain")]
#[test_case("https://acme.myshopify.com/" ; "full url")]
#[test_case("  acme  " ; "padded")]
fn test_store_name_normalization(raw: &str) {
    let creds = ShopifyCredentials::new(raw, "shpat_123");
    assert_eq!(creds.shop(), "acme");
    assert_eq!(
        creds.graphql_url().unwrap(),
        "https://acme.myshopify.com/admin/api/2024-10/graphql.json"
    );
}

#[test]
fn test_endpoint_override_with_templates() {
    let creds = ShopifyCredentials::new("acme", "shpat_123")
        .with_endpoint("http://127.0.0.1:9000/{{ store_name }}/{{ api_version }}/graphql");
    assert_eq!(
        creds.graphql_url().unwrap(),
        "http://127.0.0.1:9000/acme/2024-10/graphql"
    );
}

#[test]
fn test_endpoint_override_without_store_name() {
    let creds = ShopifyCredentials::new("", "shpat_123").with_endpoint("http://localhost:1234/gql");
    assert_eq!(creds.graphql_url().unwrap(), "http://localhost:1234/gql");
}

#[test]
fn test_missing_fields() {
    let err = ShopifyCredentials::new("", "shpat_123").validate().unwrap_err();
    assert!(err.to_string().contains("store_name"));

    let err = ShopifyCredentials::new("acme", "  ").validate().unwrap_err();
    assert!(err.to_string().contains("access_token"));

    let err = ShopifyCredentials::new("acme", "t")
        .with_api_version("")
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("api_version"));
}

#[test]
fn test_invalid_endpoint() {
    let creds = ShopifyCredentials::new("acme", "t").with_endpoint("not a url");
    let err = creds.graphql_url().unwrap_err();
    assert!(matches!(err, Error::InvalidUrl { ref url, .. } if url == "not a url"));
}

#[test]
fn test_debug_redacts_token() {
    let creds = ShopifyCredentials::new("acme", "shpat_secret");
    let debug = format!("{creds:?}");
    assert!(!debug.contains("shpat_secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_credentials_deserialize_default_version() {
    let creds: ShopifyCredentials =
        serde_json::from_str(r#"{"store_name": "acme", "access_token": "t"}"#).unwrap();
    assert_eq!(creds.api_version, "2024-10");
    assert!(creds.endpoint.is_none());
}

// ============================================================================
// Authenticator Tests
// ============================================================================

#[test]
fn test_shopify_auth_headers() {
    let creds = ShopifyCredentials::new("acme", " shpat_123 ");
    let auth = Authenticator::new(creds.auth_config());
    let headers = auth.headers();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get(ACCESS_TOKEN_HEADER), Some(&"shpat_123".to_string()));
}

#[test]
fn test_apply_overrides_existing() {
    let auth = Authenticator::new(ShopifyCredentials::new("acme", "shpat_new").auth_config());

    let mut headers = HashMap::new();
    headers.insert(ACCESS_TOKEN_HEADER.to_string(), "shpat_old".to_string());
    headers.insert("X-Request-Id".to_string(), "2".to_string());
    auth.apply(&mut headers);

    assert_eq!(headers.get(ACCESS_TOKEN_HEADER), Some(&"shpat_new".to_string()));
    assert_eq!(headers.get("X-Request-Id"), Some(&"2".to_string()));
}

#[test]
fn test_authenticator_debug_hides_values() {
    let auth = Authenticator::new(ShopifyCredentials::new("acme", "secret").auth_config());
    let debug = format!("{auth:?}");
    assert!(debug.contains(ACCESS_TOKEN_HEADER));
    assert!(!debug.contains("secret"));

    let config = ShopifyCredentials::new("acme", "secret").auth_config();
    assert!(!format!("{config:?}").contains("secret"));
}
