//! Admin API query text
//!
//! Each resource has one field selection shared by its single-object query
//! and its listing query, so `get` and `getAll` return the same shape.

use super::types::Resource;
use crate::error::{Error, Result};
use crate::graphql::GraphqlRequest;
use crate::pagination::{ConnectionQuery, PageRequest};

const PRODUCT_FIELDS: &str = "id title handle status vendor productType tags \
    totalInventory createdAt updatedAt";

const ORDER_FIELDS: &str = "id name email createdAt updatedAt \
    displayFinancialStatus displayFulfillmentStatus \
    totalPriceSet { shopMoney { amount currencyCode } }";

const CUSTOMER_FIELDS: &str = "id firstName lastName email phone state tags \
    numberOfOrders createdAt updatedAt";

const COLLECTION_FIELDS: &str = "id title handle description sortOrder updatedAt";

const INVENTORY_ITEM_FIELDS: &str = "id sku tracked createdAt updatedAt \
    unitCost { amount currencyCode }";

fn fields(resource: Resource) -> &'static str {
    match resource {
        Resource::Product => PRODUCT_FIELDS,
        Resource::Order => ORDER_FIELDS,
        Resource::Customer => CUSTOMER_FIELDS,
        Resource::Collection => COLLECTION_FIELDS,
        Resource::InventoryItem => INVENTORY_ITEM_FIELDS,
        Resource::Graphql => "",
    }
}

/// Root field holding a single object (e.g. "product")
fn object_field(resource: Resource) -> &'static str {
    match resource {
        Resource::Product => "product",
        Resource::Order => "order",
        Resource::Customer => "customer",
        Resource::Collection => "collection",
        Resource::InventoryItem => "inventoryItem",
        Resource::Graphql => "",
    }
}

/// Root field holding the connection (e.g. "products")
fn connection_field(resource: Resource) -> &'static str {
    match resource {
        Resource::Product => "products",
        Resource::Order => "orders",
        Resource::Customer => "customers",
        Resource::Collection => "collections",
        Resource::InventoryItem => "inventoryItems",
        Resource::Graphql => "",
    }
}

/// Expand a numeric id into a global id; global ids pass through
pub fn to_gid(resource: Resource, id: &str) -> Result<String> {
    let id = id.trim();
    if id.starts_with("gid://") {
        return Ok(id.to_string());
    }
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(format!("gid://shopify/{}/{id}", resource.type_name()));
    }
    Err(Error::invalid_param(
        "id",
        format!("expected a numeric id or a gid:// id, got '{id}'"),
    ))
}

/// Single-object lookup for `resource`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectQuery {
    resource: Resource,
}

impl ObjectQuery {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Root field the object is returned under
    pub fn field(&self) -> &'static str {
        object_field(self.resource)
    }

    /// Request for the object with global id `gid`
    pub fn request(&self, gid: &str) -> GraphqlRequest {
        let query = format!(
            "query Get{ty}($id: ID!) {{ {field}(id: $id) {{ {fields} }} }}",
            ty = self.resource.type_name(),
            field = self.field(),
            fields = fields(self.resource),
        );
        GraphqlRequest::new(query).variable("id", gid)
    }
}

/// Paginated listing of `resource`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    resource: Resource,
}

impl ListingQuery {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Query text; takes `$first`, `$after` and `$query`
    pub fn query_text(&self) -> String {
        format!(
            "query List{ty}s($first: Int!, $after: String, $query: String) {{ \
             {field}(first: $first, after: $after, query: $query) {{ \
             edges {{ cursor node {{ {fields} }} }} \
             pageInfo {{ hasNextPage endCursor }} }} }}",
            ty = self.resource.type_name(),
            field = connection_field(self.resource),
            fields = fields(self.resource),
        )
    }
}

impl ConnectionQuery for ListingQuery {
    fn connection_field(&self) -> &str {
        connection_field(self.resource)
    }

    fn page_request(&self, request: &PageRequest) -> GraphqlRequest {
        GraphqlRequest::new(self.query_text())
            .variable("first", request.page_size)
            .optional_variable("after", request.after.clone())
            .optional_variable("query", request.filter.clone())
    }
}
