//! Authenticator implementation
//!
//! Turns an `AuthConfig` into the headers attached to each request. Tokens
//! are pre-issued by the credential, so there is no refresh flow here.

use super::types::AuthConfig;
use crate::types::StringMap;

/// Authenticator produces the auth headers for outgoing requests
#[derive(Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Headers carrying the credential
    pub fn headers(&self) -> StringMap {
        let mut headers = StringMap::new();
        headers.insert(self.config.header_name.clone(), self.config.value.clone());
        headers
    }

    /// Apply auth headers on top of an existing header map
    pub fn apply(&self, headers: &mut StringMap) {
        headers.extend(self.headers());
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("header", &self.config.header_name)
            .finish_non_exhaustive()
    }
}
