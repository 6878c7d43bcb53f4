//! Credential and auth configuration types
//!
//! `ShopifyCredentials` is the credential record a user supplies. It is turned
//! into an endpoint URL plus an `AuthConfig`, which the `Authenticator` turns
//! into request headers.

use crate::error::{Error, Result};
use crate::template::{self, TemplateContext};
use serde::{Deserialize, Serialize};

/// Header Shopify reads the Admin API access token from
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// API version used when the credential does not pin one
pub const DEFAULT_API_VERSION: &str = "2024-10";

/// Endpoint template for Admin GraphQL
pub const DEFAULT_ENDPOINT_TEMPLATE: &str =
    "https://{{ store_name }}.myshopify.com/admin/api/{{ api_version }}/graphql.json";

/// Header carrying the credential on every request
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Header name
    pub header_name: String,
    /// Header value
    pub value: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("header_name", &self.header_name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Shopify Admin API credential
#[derive(Clone, Serialize, Deserialize)]
pub struct ShopifyCredentials {
    /// Shop subdomain, e.g. "acme" for acme.myshopify.com
    pub store_name: String,

    /// Admin API access token (shpat_...)
    #[serde(default)]
    pub access_token: String,

    /// Admin API version, e.g. "2024-10"
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Endpoint override; may contain `{{ store_name }}` / `{{ api_version }}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl ShopifyCredentials {
    /// Create credentials for a store with the default API version
    pub fn new(store_name: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            access_token: access_token.into(),
            api_version: default_api_version(),
            endpoint: None,
        }
    }

    /// Pin the API version
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Override the endpoint URL
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Check required fields are present
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_none() && normalize_store_name(&self.store_name).is_empty() {
            return Err(Error::missing_field("credentials.store_name"));
        }
        if self.access_token.trim().is_empty() {
            return Err(Error::missing_field("credentials.access_token"));
        }
        if self.api_version.trim().is_empty() {
            return Err(Error::missing_field("credentials.api_version"));
        }
        Ok(())
    }

    /// Store subdomain with any scheme, domain suffix and slashes removed
    pub fn shop(&self) -> String {
        normalize_store_name(&self.store_name)
    }

    /// Resolve the GraphQL endpoint URL
    pub fn graphql_url(&self) -> Result<String> {
        self.validate()?;

        let ctx = TemplateContext::with_credentials(serde_json::json!({
            "store_name": self.shop(),
            "api_version": self.api_version.trim(),
        }));
        let template = self
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT_TEMPLATE);
        let rendered = template::render(template, &ctx)?;

        url::Url::parse(&rendered).map_err(|e| Error::invalid_url(&rendered, e))?;
        Ok(rendered)
    }

    /// Auth configuration carrying the access token header
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            header_name: ACCESS_TOKEN_HEADER.to_string(),
            value: self.access_token.trim().to_string(),
        }
    }
}

impl std::fmt::Debug for ShopifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyCredentials")
            .field("store_name", &self.store_name)
            .field("access_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Reduce "https://acme.myshopify.com/" or "acme.myshopify.com" to "acme"
fn normalize_store_name(raw: &str) -> String {
    let name = raw.trim();
    let name = name
        .strip_prefix("https://")
        .or_else(|| name.strip_prefix("http://"))
        .unwrap_or(name);
    let name = name.trim_end_matches('/');
    let name = name.strip_suffix(".myshopify.com").unwrap_or(name);
    name.to_string()
}
