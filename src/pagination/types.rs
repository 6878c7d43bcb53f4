//! Pagination types and traits
//!
//! Defines the page request, the page (connection) shape and the trait a
//! listing implements to be drained by the fetcher.

use crate::error::{Error, Result};
use crate::graphql::GraphqlRequest;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

/// Largest page the Admin API serves
pub const MAX_PAGE_SIZE: u32 = 250;

/// Page size used when draining a listing
pub const DEFAULT_PAGE_SIZE: u32 = MAX_PAGE_SIZE;

/// Parameters for one page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of items to ask for, in `[1, 250]`
    pub page_size: u32,
    /// Cursor of the last item of the previous page
    pub after: Option<String>,
    /// Search filter passed through to the API
    pub filter: Option<String>,
}

impl PageRequest {
    /// Create a first-page request, checking the page size bounds
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(Error::validation(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        Ok(Self {
            page_size,
            after: None,
            filter: None,
        })
    }

    /// Set the search filter; blank filters are dropped, others pass
    /// through untouched
    #[must_use]
    pub fn with_filter(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.filter(|f| !f.trim().is_empty()).map(String::from);
        self
    }

    /// Set the cursor to continue after
    #[must_use]
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Request for the page following `connection`
    #[must_use]
    pub fn next<T>(&self, connection: &Connection<T>) -> Option<Self> {
        if !connection.has_next_page {
            return None;
        }
        let cursor = connection.end_cursor.clone()?;
        Some(Self {
            after: Some(cursor),
            ..self.clone()
        })
    }
}

/// A page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Whether another page follows
    pub has_next_page: bool,
    /// Cursor of the last item; `None` only when there is no next page or
    /// the page is empty
    pub end_cursor: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConnection<T> {
    edges: Option<Vec<RawEdge<T>>>,
    nodes: Option<Vec<T>>,
    page_info: RawPageInfo,
}

#[derive(Deserialize)]
struct RawEdge<T> {
    node: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageInfo {
    has_next_page: bool,
    #[serde(default)]
    end_cursor: Option<String>,
}

impl<T: DeserializeOwned> Connection<T> {
    /// Read a connection in either `edges { node }` or `nodes` form
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawConnection<T> = serde_json::from_value(value).map_err(|e| {
            Error::upstream(json!([{ "message": format!("unexpected connection shape: {e}") }]))
        })?;

        let items = match (raw.edges, raw.nodes) {
            (Some(edges), _) => edges.into_iter().map(|e| e.node).collect(),
            (None, Some(nodes)) => nodes,
            (None, None) => {
                return Err(Error::upstream(json!([
                    { "message": "connection has neither edges nor nodes" }
                ])))
            }
        };

        if raw.page_info.has_next_page && raw.page_info.end_cursor.is_none() {
            return Err(Error::upstream(json!([
                { "message": "connection reports a next page but no endCursor" }
            ])));
        }

        Ok(Self {
            items,
            has_next_page: raw.page_info.has_next_page,
            end_cursor: raw.page_info.end_cursor,
        })
    }
}

impl<T> Connection<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Tracks pagination progress during one drain
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Total items fetched so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn record<T>(&mut self, connection: &Connection<T>) {
        self.pages += 1;
        self.total_fetched += connection.len() as u64;
    }
}

/// A cursor-paginated listing the fetcher can drain
pub trait ConnectionQuery: Send + Sync {
    /// Dotted path under `data` holding the connection (e.g. "products")
    fn connection_field(&self) -> &str;

    /// Build the request for one page
    fn page_request(&self, request: &PageRequest) -> GraphqlRequest;
}
