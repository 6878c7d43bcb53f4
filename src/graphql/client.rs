//! GraphQL client bound to one endpoint
//!
//! Binds a transport, an endpoint URL and auth headers so callers only pass
//! a `GraphqlRequest`. Exactly one POST is issued per `execute` call.

use super::types::{into_data, GraphqlRequest};
use crate::auth::{Authenticator, ShopifyCredentials};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{JsonValue, StringMap};
use std::sync::Arc;
use tracing::trace;

/// Executes GraphQL requests against a fixed endpoint
#[derive(Clone)]
pub struct GraphqlClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
    headers: StringMap,
}

impl GraphqlClient {
    /// Create a client for an endpoint with no extra headers
    pub fn new(transport: Arc<dyn Transport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            headers: StringMap::new(),
        }
    }

    /// Create a client for a Shopify store
    pub fn from_credentials(
        transport: Arc<dyn Transport>,
        credentials: &ShopifyCredentials,
    ) -> Result<Self> {
        let mut client = Self::new(transport, credentials.graphql_url()?);
        Authenticator::new(credentials.auth_config()).apply(&mut client.headers);
        Ok(client)
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &StringMap {
        &self.headers
    }

    /// Send a request and return the `data` object.
    ///
    /// Fails with a transport error if the POST fails, or an upstream error
    /// if the response carries `errors` (even alongside `data`).
    pub async fn execute(&self, request: &GraphqlRequest) -> Result<JsonValue> {
        trace!(endpoint = %self.endpoint, variables = ?request.variables, "Executing GraphQL request");
        let response = self
            .transport
            .post_json(&self.endpoint, &self.headers, &request.to_body())
            .await?;
        into_data(response)
    }
}

impl std::fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("endpoint", &self.endpoint)
            .field("header_names", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
