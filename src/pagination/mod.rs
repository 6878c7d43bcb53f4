//! Pagination module
//!
//! Cursor-based pagination over GraphQL connections.
//!
//! # Overview
//!
//! A listing implements `ConnectionQuery` (which field holds the connection,
//! and how to build the request for one page). `PagedFetcher` then either
//! drains it page by page (`fetch_all`) or fetches a single bounded page
//! (`fetch_bounded`). Offsets are never used: every request after the first
//! carries the `endCursor` of the response before it.

mod fetcher;
mod types;

pub use fetcher::PagedFetcher;
pub use types::{
    Connection, ConnectionQuery, PageRequest, PaginationState, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
