//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shopify Admin GraphQL node CLI
#[derive(Parser, Debug)]
#[command(name = "shopify-graphql-node")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Node configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token, overriding the one in the config file
    #[arg(long, global = true, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the node over a set of input items
    Run {
        /// Operation for every item, e.g. `product.getAll`
        #[arg(short, long)]
        operation: Option<String>,

        /// Input items: a JSON array of parameter objects
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// Parameter default as `name=value`; values are parsed as JSON when possible
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, serde_json::Value)>,

        /// Record failed items as errors instead of aborting
        #[arg(long)]
        continue_on_fail: bool,
    },

    /// Test the credential against the store
    Check,

    /// Validate the configuration file
    Validate,

    /// List available operations
    Operations,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// Parse a `name=value` parameter
pub fn parse_param(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("parameter name is empty in '{raw}'"));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((name.to_string(), value))
}
