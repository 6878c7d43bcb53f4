//! Node types
//!
//! Output items and run statistics.

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// One output item, paired with the input item that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeItem {
    /// Output object
    pub json: JsonObject,
    /// Index of the input item
    pub paired_item: usize,
}

impl NodeItem {
    /// Create a data item
    pub fn new(json: JsonObject, paired_item: usize) -> Self {
        Self { json, paired_item }
    }

    /// Create an error item for a soft-failed input
    pub fn error(message: impl Into<String>, paired_item: usize) -> Self {
        let mut json = JsonObject::new();
        json.insert("error".to_string(), serde_json::Value::String(message.into()));
        Self { json, paired_item }
    }

    /// Check if this item records a failure
    pub fn is_error(&self) -> bool {
        self.json.len() == 1 && self.json.get("error").is_some_and(serde_json::Value::is_string)
    }
}

/// Statistics from a node run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input items processed
    pub items_processed: usize,
    /// Output objects produced
    pub objects_returned: usize,
    /// Input items recorded as errors
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl RunStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful item
    pub fn add_item(&mut self, objects: usize) {
        self.items_processed += 1;
        self.objects_returned += objects;
    }

    /// Record a soft-failed item
    pub fn add_error(&mut self) {
        self.items_processed += 1;
        self.errors += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
