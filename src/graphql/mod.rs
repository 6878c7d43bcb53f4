//! GraphQL module
//!
//! Request construction, response envelope validation and an endpoint-bound
//! client.
//!
//! # Response contract
//!
//! A successful response is `{ "data": {...} }`. A rejected one carries
//! `{ "errors": [...] }`, and `errors` always wins: a response with both is
//! treated as a failure and the partial `data` is discarded.

mod client;
mod types;

pub use client::GraphqlClient;
pub use types::{
    has_errors, into_data, parse_variables, GraphqlRequest, QueryCost, ThrottleStatus,
};
pub(crate) use types::json_type_name;

#[cfg(test)]
pub(crate) mod testing;
