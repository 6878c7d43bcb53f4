//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{parse_config, read_file, NodeConfig};
use crate::error::{Error, Result};
use crate::graphql::GraphqlRequest;
use crate::node::{NodeItem, ShopifyNode};
use crate::operations::OperationId;
use crate::params::ItemParameters;
use crate::types::{FailurePolicy, JsonValue};
use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

/// Query used by `check`; cheap and readable with any Admin scope
const CHECK_QUERY: &str = "{ shop { name myshopifyDomain } }";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run {
                operation,
                items,
                params,
                continue_on_fail,
            } => {
                self.run_node(
                    operation.as_deref(),
                    items.as_deref(),
                    params,
                    *continue_on_fail,
                )
                .await
            }
            Commands::Check => self.check().await,
            Commands::Validate => self.validate(),
            Commands::Operations => self.list_operations(),
        }
    }

    /// Load the config file, apply the token override and validate
    pub(crate) fn load_config(&self) -> Result<NodeConfig> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use -c flag)"))?;
        let mut config = parse_config(&read_file(path)?)?;
        if let Some(token) = &self.cli.access_token {
            config.credentials.access_token.clone_from(token);
        }
        config.validate()?;
        Ok(config)
    }

    /// Run the node
    async fn run_node(
        &self,
        operation: Option<&str>,
        items_path: Option<&Path>,
        params: &[(String, JsonValue)],
        continue_on_fail: bool,
    ) -> Result<()> {
        let mut config = self.load_config()?;
        if continue_on_fail {
            config.failure_policy = FailurePolicy::ContinueOnFail;
        }

        let items = match items_path {
            Some(path) => load_items(path)?,
            None => vec![json!({})],
        };
        let parameters = build_parameters(&config, operation, params, items)?;

        let mut node = ShopifyNode::from_config(&config)?;
        let output = node.execute(&parameters).await?;

        self.output_items(&output);
        let stats = node.stats();
        info!(
            items = stats.items_processed,
            returned = stats.objects_returned,
            errors = stats.errors,
            "Run complete"
        );
        Ok(())
    }

    /// Check connection
    async fn check(&self) -> Result<()> {
        let config = self.load_config()?;
        let node = ShopifyNode::from_config(&config)?;

        info!(endpoint = node.client().endpoint(), "Checking connection");

        match node.client().execute(&GraphqlRequest::new(CHECK_QUERY)).await {
            Ok(data) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "SUCCEEDED",
                        "message": "Connection successful",
                        "shop": data.get("shop").cloned().unwrap_or(Value::Null)
                    }
                }));
            }
            Err(e) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "FAILED",
                        "kind": format!("{:?}", e.kind()),
                        "message": format!("Connection failed: {e}")
                    }
                }));
            }
        }

        Ok(())
    }

    /// Validate the config file
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Config for store '{}' is valid (API {}, {} parameter defaults)",
                    config.credentials.shop(),
                    config.credentials.api_version,
                    config.parameters.len()
                )
            }
        }));

        Ok(())
    }

    /// List the operation catalog
    fn list_operations(&self) -> Result<()> {
        let operations: Vec<Value> = OperationId::all()
            .into_iter()
            .map(|op| {
                json!({
                    "operation": op.to_string(),
                    "resource": op.resource.as_str(),
                    "action": op.action.as_str(),
                })
            })
            .collect();

        self.output_message(&json!({
            "type": "OPERATIONS",
            "operations": operations
        }));

        Ok(())
    }

    fn output_items(&self, items: &[NodeItem]) {
        match self.cli.format {
            OutputFormat::Json => {
                for item in items {
                    println!("{}", serde_json::to_string(item).unwrap_or_default());
                }
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
            }
        }
    }

    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Read input items from a JSON array file
pub(crate) fn load_items(path: &Path) -> Result<Vec<JsonValue>> {
    match serde_json::from_str::<Value>(&read_file(path)?)? {
        Value::Array(items) => Ok(items),
        Value::Object(item) => Ok(vec![Value::Object(item)]),
        _ => Err(Error::validation(format!(
            "items file '{}' must hold a JSON array of objects",
            path.display()
        ))),
    }
}

/// Layer config defaults, `--operation` and `--param` values under the items
pub(crate) fn build_parameters(
    config: &NodeConfig,
    operation: Option<&str>,
    params: &[(String, JsonValue)],
    items: Vec<JsonValue>,
) -> Result<ItemParameters> {
    let mut parameters = ItemParameters::new(config.parameters.clone());
    if let Some(operation) = operation {
        let id: OperationId = operation.parse()?;
        parameters = parameters
            .with_default("resource", id.resource.as_str())
            .with_default("operation", id.action.as_str());
    }
    for (name, value) in params {
        parameters = parameters.with_default(name.clone(), value.clone());
    }
    parameters.with_items(items)
}
