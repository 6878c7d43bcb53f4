//! HTTP transport module
//!
//! Defines the `Transport` seam every GraphQL call goes through and the
//! reqwest-backed `HttpClient` that implements it.
//!
//! # Features
//!
//! - **Single attempt**: no retries or backoff; failures surface immediately
//! - **Rate Limiting**: optional token bucket pacing using governor
//! - **Error classification**: status, timeout and connection failures

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

use crate::error::Result;
use crate::types::StringMap;
use async_trait::async_trait;
use serde_json::Value;

/// Executes one JSON POST and returns the parsed JSON response.
///
/// Implementations fail on transport-level problems only (connection,
/// timeout, non-2xx status). A 200 response carrying GraphQL `errors` is a
/// successful transport call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `headers`
    async fn post_json(&self, url: &str, headers: &StringMap, body: &Value) -> Result<Value>;
}

#[cfg(test)]
mod tests;
