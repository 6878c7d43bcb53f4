//! Error types for the Shopify GraphQL node
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Errors fall into three kinds that callers act on differently:
//!
//! - **Validation**: malformed caller input, detected before any request
//! - **Transport**: the HTTP call itself failed
//! - **Upstream**: the API answered, but rejected the query (`errors` payload)
//!
//! Configuration problems form a fourth kind that only occurs at startup.

use serde_json::Value;
use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Missing required parameter '{name}' for item {item_index}")]
    MissingParameter { name: String, item_index: usize },

    #[error("Unknown operation '{operation}'")]
    UnknownOperation { operation: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("GraphQL request rejected: {message}")]
    Upstream { message: String, errors: Value },

    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad configuration or startup input
    Config,
    /// Malformed caller input, no request was sent
    Validation,
    /// Network or HTTP-level failure
    Transport,
    /// The API rejected the query
    Upstream,
    /// Anything else
    Other,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an upstream error carrying the raw `errors` payload
    pub fn upstream(errors: Value) -> Self {
        Self::Upstream {
            message: summarize_errors(&errors),
            errors,
        }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an IO error for the file at `path`
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::YamlParse(_)
            | Error::Io { .. }
            | Error::UndefinedVariable { .. } => ErrorKind::Config,
            Error::Validation { .. }
            | Error::InvalidParameter { .. }
            | Error::MissingParameter { .. }
            | Error::UnknownOperation { .. }
            | Error::JsonParse(_) => ErrorKind::Validation,
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::Timeout { .. }
            | Error::InvalidUrl { .. } => ErrorKind::Transport,
            Error::Upstream { .. } | Error::NotFound { .. } => ErrorKind::Upstream,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Check if this is an upstream error
    pub fn is_upstream(&self) -> bool {
        self.kind() == ErrorKind::Upstream
    }

    /// Raw upstream `errors` payload, if any
    pub fn upstream_errors(&self) -> Option<&Value> {
        match self {
            Error::Upstream { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Check if the API rejected the query because the cost budget ran out
    pub fn is_throttled(&self) -> bool {
        match self {
            Error::Upstream { errors, .. } => errors.as_array().is_some_and(|errs| {
                errs.iter().any(|e| {
                    e.pointer("/extensions/code").and_then(Value::as_str) == Some("THROTTLED")
                })
            }),
            Error::HttpStatus { status, .. } => *status == 429,
            _ => false,
        }
    }
}

/// Join the `message` fields of an `errors` payload into one line
fn summarize_errors(errors: &Value) -> String {
    match errors {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .map(|e| match e.get("message").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => e.to_string(),
                })
                .collect();
            if messages.is_empty() {
                "empty errors payload".to_string()
            } else {
                messages.join("; ")
            }
        }
        other => other.to_string(),
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
