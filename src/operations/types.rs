//! Operation identifiers

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A Shopify resource the node can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Product,
    Order,
    Customer,
    Collection,
    InventoryItem,
    /// Caller-supplied GraphQL
    Graphql,
}

impl Resource {
    /// Every resource, in catalog order
    pub const ALL: [Resource; 6] = [
        Resource::Product,
        Resource::Order,
        Resource::Customer,
        Resource::Collection,
        Resource::InventoryItem,
        Resource::Graphql,
    ];

    /// Parameter value naming this resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Product => "product",
            Resource::Order => "order",
            Resource::Customer => "customer",
            Resource::Collection => "collection",
            Resource::InventoryItem => "inventoryItem",
            Resource::Graphql => "graphql",
        }
    }

    /// GraphQL object type, as used in global ids
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::Product => "Product",
            Resource::Order => "Order",
            Resource::Customer => "Customer",
            Resource::Collection => "Collection",
            Resource::InventoryItem => "InventoryItem",
            Resource::Graphql => "QueryRoot",
        }
    }

    /// Actions available on this resource
    pub fn actions(&self) -> &'static [Action] {
        match self {
            Resource::Product | Resource::Order | Resource::Customer | Resource::Collection => {
                &[Action::Get, Action::GetAll]
            }
            Resource::InventoryItem => &[Action::GetAll],
            Resource::Graphql => &[Action::Execute],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::invalid_param("resource", format!("unknown resource '{s}'")))
    }
}

/// What to do with a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Look up one object by id
    Get,
    /// List objects, one bounded page or every page
    GetAll,
    /// Run a raw query
    Execute,
}

impl Action {
    /// Parameter value naming this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Get => "get",
            Action::GetAll => "getAll",
            Action::Execute => "execute",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `resource.action` pair from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId {
    pub resource: Resource,
    pub action: Action,
}

impl OperationId {
    /// Pair a resource with an action, rejecting combinations not in the catalog
    pub fn new(resource: Resource, action: &str) -> Result<Self> {
        resource
            .actions()
            .iter()
            .find(|a| a.as_str() == action)
            .map(|&action| Self { resource, action })
            .ok_or_else(|| Error::UnknownOperation {
                operation: format!("{resource}.{action}"),
            })
    }

    /// Every operation in the catalog
    pub fn all() -> Vec<OperationId> {
        Resource::ALL
            .iter()
            .flat_map(|&resource| {
                resource
                    .actions()
                    .iter()
                    .map(move |&action| OperationId { resource, action })
            })
            .collect()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)
    }
}

impl FromStr for OperationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownOperation {
            operation: s.to_string(),
        };
        let (resource, action) = s.split_once('.').ok_or_else(unknown)?;
        let resource = resource.parse::<Resource>().map_err(|_| unknown())?;
        OperationId::new(resource, action)
    }
}
