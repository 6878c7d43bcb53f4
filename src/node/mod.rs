//! Node module
//!
//! Runs one operation per input item and collects the output items.
//!
//! # Overview
//!
//! The node module provides:
//! - `ShopifyNode` - Executes the operation each item selects
//! - `NodeItem` - Output item paired with its input index
//! - `RunStats` - Counters for a run
//!
//! Items are processed one at a time, in input order. Under
//! `FailurePolicy::Stop` the first failure aborts the run. Under
//! `FailurePolicy::ContinueOnFail` transport and upstream failures become
//! error items; validation failures abort regardless of policy.

mod types;

pub use types::{NodeItem, RunStats};

use crate::config::NodeConfig;
use crate::error::{ErrorKind, Result};
use crate::graphql::GraphqlClient;
use crate::http::{HttpClient, Transport};
use crate::operations::OperationPlan;
use crate::params::{ItemParams, ParameterReader};
use crate::types::FailurePolicy;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Shopify Admin GraphQL node
pub struct ShopifyNode {
    /// Endpoint-bound GraphQL client
    client: GraphqlClient,
    /// Failure handling
    policy: FailurePolicy,
    /// Statistics of the last run
    stats: RunStats,
}

impl ShopifyNode {
    /// Create a node over a client
    pub fn new(client: GraphqlClient) -> Self {
        Self {
            client,
            policy: FailurePolicy::default(),
            stats: RunStats::default(),
        }
    }

    /// Build a node from a config, over a real HTTP client
    pub fn from_config(config: &NodeConfig) -> Result<Self> {
        let transport = HttpClient::with_config(config.http.client_config())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Build a node from a config, over any transport
    pub fn with_transport(config: &NodeConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let client = GraphqlClient::from_credentials(transport, &config.credentials)?;
        Ok(Self::new(client).with_failure_policy(config.failure_policy))
    }

    /// Set the failure policy
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the GraphQL client
    pub fn client(&self) -> &GraphqlClient {
        &self.client
    }

    /// Get the failure policy
    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Get statistics of the last run
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Run every input item and return the output items in input order
    ///
    /// Stats cover the items handled before an aborting error, and the
    /// duration is recorded either way.
    pub async fn execute(&mut self, params: &dyn ParameterReader) -> Result<Vec<NodeItem>> {
        let start = Instant::now();
        self.stats = RunStats::new();
        let mut output = Vec::new();

        info!(items = params.item_count(), policy = ?self.policy, "Starting node run");

        let result = self.run_items(params, &mut output).await;
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        match result {
            Ok(()) => {
                info!(
                    items = self.stats.items_processed,
                    returned = self.stats.objects_returned,
                    errors = self.stats.errors,
                    duration_ms = self.stats.duration_ms,
                    "Node run finished"
                );
                Ok(output)
            }
            Err(e) => {
                warn!(
                    items = self.stats.items_processed,
                    duration_ms = self.stats.duration_ms,
                    error = %e,
                    "Node run aborted"
                );
                Err(e)
            }
        }
    }

    async fn run_items(
        &mut self,
        params: &dyn ParameterReader,
        output: &mut Vec<NodeItem>,
    ) -> Result<()> {
        for index in 0..params.item_count() {
            let item = ItemParams::new(params, index);
            let plan = OperationPlan::from_params(&item)?;

            match plan.run(&self.client).await {
                Ok(objects) => {
                    debug!(item = index, count = objects.len(), "Item completed");
                    self.stats.add_item(objects.len());
                    output.extend(objects.into_iter().map(|json| NodeItem::new(json, index)));
                }
                Err(e) if self.policy.continues() && soft_fails(e.kind()) => {
                    warn!(item = index, kind = ?e.kind(), error = %e, "Item failed, continuing");
                    self.stats.add_error();
                    output.push(NodeItem::error(e.to_string(), index));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// Kinds that may become error items under `ContinueOnFail`
fn soft_fails(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::Transport | ErrorKind::Upstream)
}
