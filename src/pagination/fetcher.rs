//! Cursor-driven page fetcher
//!
//! Drains a listing by chaining each request to the `endCursor` of the
//! response before it. The only state carried between requests is that
//! cursor.
//!
//! A full drain gives no snapshot isolation: items written to the store
//! while the drain runs may or may not appear in the result.

use super::types::{Connection, ConnectionQuery, PageRequest, PaginationState, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::graphql::GraphqlClient;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Fetches pages of one listing through a GraphQL client
pub struct PagedFetcher<'a, Q: ConnectionQuery + ?Sized> {
    client: &'a GraphqlClient,
    query: &'a Q,
}

impl<'a, Q: ConnectionQuery + ?Sized> PagedFetcher<'a, Q> {
    /// Create a fetcher for `query`
    pub fn new(client: &'a GraphqlClient, query: &'a Q) -> Self {
        Self { client, query }
    }

    /// Fetch a single page
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        request: &PageRequest,
    ) -> Result<Connection<T>> {
        let data = self
            .client
            .execute(&self.query.page_request(request))
            .await?;
        let field = self.query.connection_field();
        Connection::from_value(take_path(data, field)?)
    }

    /// Fetch every page with the maximum page size
    pub async fn fetch_all<T: DeserializeOwned>(&self, filter: Option<&str>) -> Result<Vec<T>> {
        self.fetch_all_with_page_size(filter, DEFAULT_PAGE_SIZE)
            .await
    }

    /// Fetch every page, `page_size` items at a time.
    ///
    /// The first error aborts the drain; items from earlier pages are
    /// dropped with it.
    pub async fn fetch_all_with_page_size<T: DeserializeOwned>(
        &self,
        filter: Option<&str>,
        page_size: u32,
    ) -> Result<Vec<T>> {
        let mut request = PageRequest::new(page_size)?.with_filter(filter);
        let mut state = PaginationState::new();
        let mut items = Vec::new();

        loop {
            let page: Connection<T> = self.fetch_page(&request).await?;
            state.record(&page);

            debug!(
                connection = self.query.connection_field(),
                page = state.pages,
                count = page.len(),
                has_next_page = page.has_next_page,
                "Fetched page"
            );

            let next = request.next(&page);
            items.extend(page.items);

            match next {
                Some(next) => request = next,
                None => break,
            }
        }

        info!(
            connection = self.query.connection_field(),
            pages = state.pages,
            total = state.total_fetched,
            "Fetched all pages"
        );
        Ok(items)
    }

    /// Fetch one page of at most `limit` items, without following cursors
    pub async fn fetch_bounded<T: DeserializeOwned>(
        &self,
        filter: Option<&str>,
        limit: u32,
    ) -> Result<Vec<T>> {
        let request = PageRequest::new(limit)?.with_filter(filter);
        let page: Connection<T> = self.fetch_page(&request).await?;
        debug!(
            connection = self.query.connection_field(),
            count = page.len(),
            limit,
            "Fetched bounded page"
        );
        Ok(page.items)
    }
}

/// Move the value at a dotted path out of `data`
fn take_path(mut data: Value, path: &str) -> Result<Value> {
    for part in path.split('.') {
        data = match data {
            Value::Object(mut map) => map.remove(part),
            _ => None,
        }
        .filter(|v| !v.is_null())
        .ok_or_else(|| {
            Error::upstream(json!([{ "message": format!("response has no '{path}' connection") }]))
        })?;
    }
    Ok(data)
}
