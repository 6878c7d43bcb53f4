//! Operation catalog
//!
//! Maps `resource.action` identifiers to Admin API queries.
//!
//! # Operations
//!
//! - `product`, `order`, `customer`, `collection`: `get` and `getAll`
//! - `inventoryItem`: `getAll`
//! - `graphql`: `execute` (caller-supplied query and variables)
//!
//! `OperationPlan` turns one item's parameters into a validated plan, then
//! runs it against a `GraphqlClient`.

mod plan;
mod queries;
mod types;

pub use plan::{OperationPlan, DEFAULT_LIMIT};
pub use queries::{to_gid, ListingQuery, ObjectQuery};
pub use types::{Action, OperationId, Resource};
