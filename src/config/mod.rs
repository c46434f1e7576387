//! Client options for brief.
//!
//! This module defines the `ClientOptions` struct shared by every agent: how
//! caller-supplied instructions combine with manifest ones, and the tool
//! policy passed through to downstream chat clients. It supports
//! forward-compatible YAML parsing (unknown fields are preserved), sensible
//! defaults for optional fields, and validation of option values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::ClientOptions;
pub use types::{ResolutionPolicy, ToolChoice, ToolChoiceMode};
