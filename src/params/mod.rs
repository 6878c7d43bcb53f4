//! Parameter module
//!
//! The node reads its per-item configuration through `ParameterReader`, so
//! it can run inside any host that can answer "value of parameter X for
//! item i". `ItemParameters` is the in-process implementation used by the
//! CLI and tests; `ItemParams` adds typed, validating accessors on top.

mod reader;

pub use reader::{ItemParameters, ItemParams, ParameterReader};

#[cfg(test)]
mod tests;
