//! ClientOptions struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options shared by all agents, regardless of the client they feed.
///
/// ```yaml
/// instructions: append        # or replace
/// parallel_tool_execution: true
/// tool_choice: auto           # none | auto | required
/// forced_tool: get_weather    # optional, forces one specific tool
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// How provided instructions combine with those found in the manifest.
    #[serde(default)]
    pub instructions: ResolutionPolicy,

    /// Whether the model may execute several tool calls in parallel.
    #[serde(default = "default_true")]
    pub parallel_tool_execution: bool,

    /// Tool calling behaviour requested from the model.
    #[serde(default)]
    pub tool_choice: ToolChoiceMode,

    /// Name of a tool the model must call. Takes precedence over `tool_choice`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_tool: Option<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            instructions: ResolutionPolicy::default(),
            parallel_tool_execution: default_true(),
            tool_choice: ToolChoiceMode::default(),
            forced_tool: None,
            extra: BTreeMap::new(),
        }
    }
}
