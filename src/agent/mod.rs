//! Agent construction and invocation.
//!
//! This module provides the instruction-preparation layer for agents:
//!
//! - **Manifest**: Agent declarations and their instruction templates (`agents.yaml`)
//! - **Binding**: Resolving which agent is being constructed
//! - **Prompt**: Template resolution and instruction aggregation
//! - **Activate**: Constructed agents and their single invocation entry point
//! - **Client**: The value handed to downstream chat clients
//!
//! # Design Philosophy
//!
//! The crate prepares one string. Model clients, tool execution and message
//! transport belong to adapters built on top of [`ClientRequest`]; nothing
//! here performs I/O after construction.

mod activate;
mod binding;
mod client;
mod manifest;
pub mod prompt;
mod report;

// Re-export public API
pub use activate::Agent;
pub use binding::{
    AGENT_ENV_VAR, AgentBinding, AgentSource, AmbientContext, BindingSource, resolve_agent,
};
pub use client::ClientRequest;
pub use manifest::{AgentEntry, AgentKind, AgentManifest, DEFAULT_VERSION, ManifestRegistry};
pub use report::{ExecutionReport, MessageList, ReportState};
