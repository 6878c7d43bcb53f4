//! In-memory transports for unit tests

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::StringMap;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One recorded POST
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: StringMap,
    pub body: Value,
}

impl RecordedRequest {
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.body.get("variables").and_then(|v| v.get(name))
    }
}

/// Replays canned responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<std::result::Result<Value, u16>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    pub fn fail_status(self, status: u16) -> Self {
        self.responses.lock().unwrap().push_back(Err(status));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(&self, url: &str, headers: &StringMap, body: &Value) -> Result<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.clone(),
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(status)) => Err(Error::http_status(status, "scripted failure")),
            None => Err(Error::Other("no scripted response left".into())),
        }
    }
}

/// Serves a cursor-paginated listing of `total` items under `field`.
///
/// Cursors are `cursor:<index of last item>`. Honours the `first`, `after`
/// and `query` variables; `query` is matched as a substring of the title.
pub struct SimulatedListing {
    field: String,
    items: Vec<Value>,
    fail_on_request: Option<(usize, Value)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl SimulatedListing {
    pub fn new(field: &str, total: usize) -> Self {
        let items = (1..=total)
            .map(|i| {
                json!({
                    "id": format!("gid://shopify/Product/{i}"),
                    "title": format!("Item {i}"),
                })
            })
            .collect();
        Self {
            field: field.to_string(),
            items,
            fail_on_request: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer the n-th request (1-based) with an `errors` payload
    pub fn failing_on(mut self, request_number: usize, errors: Value) -> Self {
        self.fail_on_request = Some((request_number, errors));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn page(&self, body: &Value) -> Value {
        let vars = &body["variables"];
        let first = vars["first"].as_u64().unwrap_or(50) as usize;
        let start = vars["after"]
            .as_str()
            .and_then(|c| c.strip_prefix("cursor:"))
            .and_then(|i| i.parse::<usize>().ok())
            .map_or(0, |i| i + 1);

        let filtered: Vec<(usize, &Value)> = match vars["query"].as_str() {
            Some(q) => self
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| item["title"].as_str().unwrap_or("").contains(q))
                .collect(),
            None => self.items.iter().enumerate().collect(),
        };

        let page: Vec<(usize, &Value)> = filtered
            .iter()
            .filter(|(i, _)| *i >= start)
            .take(first)
            .copied()
            .collect();
        let last_index = page.last().map(|(i, _)| *i);
        let has_next = last_index.is_some_and(|last| filtered.iter().any(|(i, _)| *i > last));

        let edges: Vec<Value> = page
            .iter()
            .map(|(i, node)| json!({"cursor": format!("cursor:{i}"), "node": node}))
            .collect();

        json!({
            "data": {
                self.field.clone(): {
                    "edges": edges,
                    "pageInfo": {
                        "hasNextPage": has_next,
                        "endCursor": last_index.map(|i| format!("cursor:{i}")),
                    }
                }
            },
            "extensions": {
                "cost": {
                    "requestedQueryCost": 52,
                    "actualQueryCost": 12,
                    "throttleStatus": {
                        "maximumAvailable": 2000.0,
                        "currentlyAvailable": 1988.0,
                        "restoreRate": 100.0
                    }
                }
            }
        })
    }
}

#[async_trait]
impl Transport for SimulatedListing {
    async fn post_json(&self, url: &str, headers: &StringMap, body: &Value) -> Result<Value> {
        let number = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
                body: body.clone(),
            });
            requests.len()
        };

        if let Some((fail_at, errors)) = &self.fail_on_request {
            if *fail_at == number {
                return Ok(json!({ "errors": errors }));
            }
        }
        Ok(self.page(body))
    }
}
