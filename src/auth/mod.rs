//! Authentication module
//!
//! Shopify Admin API access-token credentials.
//!
//! The credential record resolves the Admin GraphQL endpoint; the
//! `Authenticator` turns it into request headers.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{
    AuthConfig, ShopifyCredentials, ACCESS_TOKEN_HEADER, DEFAULT_API_VERSION,
    DEFAULT_ENDPOINT_TEMPLATE,
};

#[cfg(test)]
mod tests;
