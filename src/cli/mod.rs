//! CLI module
//!
//! Command-line interface for running the node.
//!
//! # Commands
//!
//! - `run` - Execute the node over input items
//! - `check` - Test the credential against the store
//! - `validate` - Validate the configuration file
//! - `operations` - List available operations

mod commands;
mod runner;

pub use commands::{parse_param, Cli, Commands, OutputFormat};
pub use runner::Runner;
