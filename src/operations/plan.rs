//! Operation plans
//!
//! Building a plan only reads parameters and never touches the network, so
//! every validation error surfaces before the first request.

use super::queries::{to_gid, ListingQuery, ObjectQuery};
use super::types::{Action, OperationId, Resource};
use crate::error::{Error, Result};
use crate::graphql::{json_type_name, parse_variables, GraphqlClient, GraphqlRequest};
use crate::pagination::{ConnectionQuery, PageRequest, PagedFetcher, DEFAULT_PAGE_SIZE};
use crate::params::ItemParams;
use crate::types::JsonObject;
use serde_json::{json, Value};
use tracing::debug;

/// Items returned by a listing when `limit` is not set
pub const DEFAULT_LIMIT: u32 = 50;

/// A fully validated operation, ready to run
#[derive(Debug, Clone, PartialEq)]
pub enum OperationPlan {
    /// Look up one object by global id
    Get { query: ObjectQuery, gid: String },
    /// List a connection, bounded to one page or drained
    List {
        listing: ListingQuery,
        page: PageRequest,
        return_all: bool,
    },
    /// Run caller-supplied GraphQL
    Execute { request: GraphqlRequest },
}

impl OperationPlan {
    /// Read `resource` and `operation` and build the plan they select
    pub fn from_params(params: &ItemParams<'_>) -> Result<Self> {
        let resource: Resource = params.string("resource")?.parse()?;
        let operation = OperationId::new(resource, &params.string("operation")?)?;
        Self::build(operation, params)
    }

    /// Build the plan for `operation` from the item's parameters
    pub fn build(operation: OperationId, params: &ItemParams<'_>) -> Result<Self> {
        let resource = operation.resource;
        match operation.action {
            Action::Get => {
                let gid = to_gid(resource, &params.string("id")?)?;
                Ok(Self::Get {
                    query: ObjectQuery::new(resource),
                    gid,
                })
            }
            Action::GetAll => {
                let return_all = params.bool_or("returnAll", false)?;
                let page_size = if return_all {
                    DEFAULT_PAGE_SIZE
                } else {
                    params.u32_or("limit", DEFAULT_LIMIT)?
                };
                let page = PageRequest::new(page_size)
                    .map_err(|e| Error::invalid_param("limit", e.to_string()))?
                    .with_filter(params.optional_string("query")?.as_deref());
                Ok(Self::List {
                    listing: ListingQuery::new(resource),
                    page,
                    return_all,
                })
            }
            Action::Execute => {
                let query = params.string("query")?;
                let variables = match params.raw("variables") {
                    Some(raw) => parse_variables(&raw)?,
                    None => JsonObject::new(),
                };
                Ok(Self::Execute {
                    request: GraphqlRequest::new(query).with_variables(variables),
                })
            }
        }
    }

    /// The first request this plan sends
    pub fn first_request(&self) -> GraphqlRequest {
        match self {
            Self::Get { query, gid } => query.request(gid),
            Self::List { listing, page, .. } => listing.page_request(page),
            Self::Execute { request } => request.clone(),
        }
    }

    /// Run the plan and return its output objects
    pub async fn run(&self, client: &GraphqlClient) -> Result<Vec<JsonObject>> {
        match self {
            Self::Get { query, gid } => {
                let mut data = client.execute(&query.request(gid)).await?;
                match data.get_mut(query.field()).map(Value::take) {
                    Some(Value::Object(object)) => Ok(vec![object]),
                    Some(Value::Null) | None => Err(Error::not_found(query.field(), gid.as_str())),
                    Some(other) => Err(Error::upstream(json!([{
                        "message": format!(
                            "expected '{}' to be an object, got {}",
                            query.field(),
                            json_type_name(&other)
                        )
                    }]))),
                }
            }
            Self::List {
                listing,
                page,
                return_all,
            } => {
                let fetcher = PagedFetcher::new(client, listing);
                let filter = page.filter.as_deref();
                let items: Vec<JsonObject> = if *return_all {
                    fetcher
                        .fetch_all_with_page_size(filter, page.page_size)
                        .await?
                } else {
                    fetcher.fetch_bounded(filter, page.page_size).await?
                };
                debug!(
                    resource = %listing.resource(),
                    count = items.len(),
                    return_all,
                    "Listed objects"
                );
                Ok(items)
            }
            Self::Execute { request } => match client.execute(request).await? {
                Value::Object(data) => Ok(vec![data]),
                other => {
                    let mut wrapped = JsonObject::new();
                    wrapped.insert("data".to_string(), other);
                    Ok(vec![wrapped])
                }
            },
        }
    }
}
