//! GraphQL request and response envelope types

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One GraphQL request body: `{ "query": ..., "variables": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    /// Query document
    pub query: String,
    /// Variables mapping
    #[serde(default)]
    pub variables: JsonObject,
}

impl GraphqlRequest {
    /// Create a request with no variables
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: JsonObject::new(),
        }
    }

    /// Set one variable
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Set a variable only when a value is present
    #[must_use]
    pub fn optional_variable(self, name: impl Into<String>, value: Option<impl Into<JsonValue>>) -> Self {
        match value {
            Some(v) => self.variable(name, v),
            None => self,
        }
    }

    /// Replace all variables
    #[must_use]
    pub fn with_variables(mut self, variables: JsonObject) -> Self {
        self.variables = variables;
        self
    }

    /// JSON body sent over the wire
    pub fn to_body(&self) -> JsonValue {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }
}

/// Parse a variables parameter.
///
/// Accepts a JSON object, a string holding a JSON object, an empty string or
/// null. Anything else is a validation error.
pub fn parse_variables(raw: &JsonValue) -> Result<JsonObject> {
    match raw {
        Value::Null => Ok(JsonObject::new()),
        Value::Object(map) => Ok(map.clone()),
        Value::String(s) if s.trim().is_empty() => Ok(JsonObject::new()),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(Error::invalid_param(
                "variables",
                format!("expected a JSON object, got {}", json_type_name(&other)),
            )),
            Err(e) => Err(Error::invalid_param(
                "variables",
                format!("not valid JSON: {e}"),
            )),
        },
        other => Err(Error::invalid_param(
            "variables",
            format!("expected a JSON object, got {}", json_type_name(other)),
        )),
    }
}

/// Short name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Query cost report from `extensions.cost`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCost {
    /// Cost the API estimated before running the query
    pub requested_query_cost: Option<f64>,
    /// Cost actually charged
    pub actual_query_cost: Option<f64>,
    /// Remaining bucket
    pub throttle_status: Option<ThrottleStatus>,
}

/// Leaky bucket state reported with each response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleStatus {
    /// Bucket size
    pub maximum_available: f64,
    /// Points left right now
    pub currently_available: f64,
    /// Points restored per second
    pub restore_rate: f64,
}

impl QueryCost {
    /// Read the cost block from a raw response, if present
    pub fn from_response(response: &JsonValue) -> Option<Self> {
        let cost = response.pointer("/extensions/cost")?;
        serde_json::from_value(cost.clone()).ok()
    }
}

/// Check whether an `errors` value signals a rejected query.
///
/// A non-empty array or any non-null scalar/object counts; an empty array
/// does not.
pub fn has_errors(errors: &JsonValue) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Validate a raw response envelope and return its `data` object.
///
/// `errors` is checked before `data`: a response carrying both is a
/// failure, never a partial success.
pub fn into_data(response: JsonValue) -> Result<JsonValue> {
    if let Some(errors) = response.get("errors") {
        if has_errors(errors) {
            return Err(Error::upstream(errors.clone()));
        }
    }

    if let Some(cost) = QueryCost::from_response(&response) {
        debug!(
            requested = cost.requested_query_cost,
            actual = cost.actual_query_cost,
            available = cost.throttle_status.as_ref().map(|t| t.currently_available),
            "Query cost"
        );
    }

    match response {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(Error::upstream(serde_json::json!([
                {"message": "response contained no data"}
            ]))),
        },
        other => Err(Error::upstream(serde_json::json!([{
            "message": format!("expected a JSON object response, got {}", json_type_name(&other))
        }]))),
    }
}
