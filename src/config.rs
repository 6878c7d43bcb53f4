//! Node configuration
//!
//! A node is configured from a YAML file (JSON works too, being a YAML
//! subset) holding the store credential, HTTP settings, the failure policy
//! and node-level parameter defaults.
//!
//! ```yaml
//! credentials:
//!   store_name: acme
//!   access_token: shpat_xxx
//!   api_version: "2024-10"
//! http:
//!   timeout_seconds: 30
//!   rate_limit: { requests_per_second: 2, burst_size: 4 }
//! failure_policy: continue_on_fail
//! parameters:
//!   resource: product
//!   operation: getAll
//! ```

use crate::auth::ShopifyCredentials;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{FailurePolicy, JsonObject};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Store credential
    pub credentials: ShopifyCredentials,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,

    /// What to do when one item fails
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Parameter defaults applied to every item
    #[serde(default)]
    pub parameters: JsonObject,
}

impl NodeConfig {
    /// Create a config for a credential with default settings
    pub fn new(credentials: ShopifyCredentials) -> Self {
        Self {
            credentials,
            http: HttpSettings::default(),
            failure_policy: FailurePolicy::default(),
            parameters: JsonObject::new(),
        }
    }

    /// Set the failure policy
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set a parameter default
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        self.credentials.graphql_url()?;
        self.http.validate()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Client-side pacing; off unless set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimiterConfig>,

    /// Override for the User-Agent header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            rate_limit: None,
            user_agent: None,
        }
    }
}

impl HttpSettings {
    fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(Error::config("http.timeout_seconds must be greater than 0"));
        }
        if let Some(limit) = &self.rate_limit {
            if limit.requests_per_second == 0 || limit.burst_size == 0 {
                return Err(Error::config(
                    "http.rate_limit requires requests_per_second and burst_size greater than 0",
                ));
            }
        }
        Ok(())
    }

    /// Client configuration for these settings
    pub fn client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_seconds));
        if let Some(limit) = &self.rate_limit {
            builder = builder.rate_limit(limit.clone());
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Read a file into a string, naming the path on failure
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))
}

/// Load and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> Result<NodeConfig> {
    load_config_from_str(&read_file(path)?)
}

/// Parse and validate a config document
pub fn load_config_from_str(yaml: &str) -> Result<NodeConfig> {
    let config = parse_config(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Parse a config document without validating it
pub fn parse_config(yaml: &str) -> Result<NodeConfig> {
    Ok(serde_yaml::from_str(yaml)?)
}
