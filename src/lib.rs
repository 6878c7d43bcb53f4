// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Shopify GraphQL Node
//!
//! A workflow node that runs pre-built queries against the Shopify Admin
//! GraphQL API, draining cursor-paginated listings.
//!
//! ## Features
//!
//! - **Operation Catalog**: get/list products, orders, customers, collections
//!   and inventory items, or run a raw query
//! - **Cursor Pagination**: bounded single page or full drain over `endCursor`
//! - **Strict Error Contract**: `errors` always beats `data`; validation,
//!   transport and upstream failures are told apart
//! - **Per-Item Failure Policy**: stop on the first failure or record
//!   runtime failures as error items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_graphql_node::{load_config, ItemParameters, ShopifyNode, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = load_config("node.yaml")?;
//!     let mut node = ShopifyNode::from_config(&config)?;
//!
//!     let params = ItemParameters::new(config.parameters.clone())
//!         .with_default("resource", "product")
//!         .with_default("operation", "getAll")
//!         .with_default("returnAll", true)
//!         .with_items(vec![serde_json::json!({})])?;
//!
//!     for item in node.execute(&params).await? {
//!         println!("{}", serde_json::to_string(&item)?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ShopifyNode: per item → OperationPlan → output items        │
//! └──────────────────────────────────────────────────────────────┘
//!          │                    │                      │
//! ┌────────┴───────┬────────────┴─────────┬────────────┴─────────┐
//! │   Params       │  Operations          │  Pagination          │
//! │ ParameterReader│  resource.action     │  PagedFetcher        │
//! │ ItemParameters │  query text, GIDs    │  Connection, cursors │
//! └────────────────┴──────────────────────┴──────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬───────────────────┐
//! │   GraphQL    │   HTTP                   │   Auth            │
//! │ envelope,    │ Transport trait,         │ store credential, │
//! │ errors first │ reqwest, rate limit      │ token header      │
//! └──────────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the node
pub mod error;

/// Common types and type aliases
pub mod types;

/// Store credential and auth headers
pub mod auth;

/// HTTP transport with rate limiting
pub mod http;

/// GraphQL requests and response envelopes
pub mod graphql;

/// Cursor pagination over connections
pub mod pagination;

/// Per-item parameter access
pub mod params;

/// Operation catalog
pub mod operations;

/// Node execution
pub mod node;

/// Node configuration
pub mod config;

/// Template interpolation
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::ShopifyCredentials;
pub use config::{load_config, load_config_from_str, NodeConfig};
pub use graphql::{GraphqlClient, GraphqlRequest};
pub use node::{NodeItem, ShopifyNode};
pub use pagination::{Connection, PagedFetcher};
pub use params::{ItemParameters, ParameterReader};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
