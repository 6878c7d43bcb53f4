//! Parameter reader trait and implementations

use crate::error::{Error, Result};
use crate::graphql::json_type_name;
use crate::types::{JsonObject, JsonValue};
use serde_json::Value;

/// Reads a named parameter for one input item
pub trait ParameterReader: Send + Sync {
    /// Value of `name` for the item at `item_index`, if set
    fn get_param(&self, name: &str, item_index: usize) -> Option<JsonValue>;

    /// Number of input items
    fn item_count(&self) -> usize;
}

/// Node-level defaults overlaid by per-item values
#[derive(Debug, Clone, Default)]
pub struct ItemParameters {
    defaults: JsonObject,
    items: Vec<JsonObject>,
}

impl ItemParameters {
    /// Create parameters with defaults and no items
    pub fn new(defaults: JsonObject) -> Self {
        Self {
            defaults,
            items: Vec::new(),
        }
    }

    /// Set the per-item values; every item must be a JSON object
    pub fn with_items(mut self, items: Vec<JsonValue>) -> Result<Self> {
        self.items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(Error::validation(format!(
                    "input item {index} must be a JSON object, got {}",
                    json_type_name(&other)
                ))),
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Add a single item
    #[must_use]
    pub fn push_item(mut self, item: JsonObject) -> Self {
        self.items.push(item);
        self
    }

    /// Set a default value
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Typed accessor for one item
    pub fn item(&self, item_index: usize) -> ItemParams<'_> {
        ItemParams::new(self, item_index)
    }
}

impl ParameterReader for ItemParameters {
    fn get_param(&self, name: &str, item_index: usize) -> Option<JsonValue> {
        self.items
            .get(item_index)
            .and_then(|item| item.get(name))
            .filter(|v| !v.is_null())
            .or_else(|| self.defaults.get(name))
            .cloned()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Typed, validating view of one item's parameters
#[derive(Clone, Copy)]
pub struct ItemParams<'a> {
    reader: &'a dyn ParameterReader,
    item_index: usize,
}

impl<'a> ItemParams<'a> {
    /// Create a view of `item_index`
    pub fn new(reader: &'a dyn ParameterReader, item_index: usize) -> Self {
        Self { reader, item_index }
    }

    /// Index of the item being read
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// Raw value; JSON null counts as unset
    pub fn raw(&self, name: &str) -> Option<JsonValue> {
        self.reader
            .get_param(name, self.item_index)
            .filter(|v| !v.is_null())
    }

    /// Required non-empty string
    pub fn string(&self, name: &str) -> Result<String> {
        self.optional_string(name)?
            .ok_or_else(|| Error::MissingParameter {
                name: name.to_string(),
                item_index: self.item_index,
            })
    }

    /// Optional string; blank strings count as unset, numbers are accepted
    pub fn optional_string(&self, name: &str) -> Result<Option<String>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(Error::invalid_param(
                name,
                format!("expected a string, got {}", json_type_name(&other)),
            )),
        }
    }

    /// Boolean with default; accepts "true"/"false" strings
    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool> {
        match self.raw(name) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(b),
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(Error::invalid_param(
                    name,
                    format!("expected true or false, got '{s}'"),
                )),
            },
            Some(other) => Err(Error::invalid_param(
                name,
                format!("expected a boolean, got {}", json_type_name(&other)),
            )),
        }
    }

    /// Unsigned integer with default; accepts numeric strings
    pub fn u32_or(&self, name: &str, default: u32) -> Result<u32> {
        let invalid = |shown: String| {
            Error::invalid_param(name, format!("expected a positive integer, got {shown}"))
        };
        match self.raw(name) {
            None => Ok(default),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| invalid(n.to_string())),
            Some(Value::String(s)) => s.trim().parse::<u32>().map_err(|_| invalid(format!("'{s}'"))),
            Some(other) => Err(invalid(json_type_name(&other).to_string())),
        }
    }
}
