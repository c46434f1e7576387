//! Option enums shared across brief.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How caller-provided instructions combine with discovered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Provided instructions follow the discovered ones (default).
    #[default]
    Append,
    /// Provided instructions fully substitute the discovered ones.
    Replace,
}

impl ResolutionPolicy {
    /// Parse a resolution policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "append" => Some(Self::Append),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// Tool calling mode requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolChoiceMode {
    /// The model only generates messages.
    None,
    /// The model decides between messages and tool calls (default).
    #[default]
    Auto,
    /// The model must call one or more tools.
    Required,
}

/// Effective tool choice passed unmodified to a downstream client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolChoice {
    None,
    Auto,
    Required,
    /// Call exactly this tool.
    Tool(String),
}

impl fmt::Display for ToolChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolChoice::None => f.write_str("none"),
            ToolChoice::Auto => f.write_str("auto"),
            ToolChoice::Required => f.write_str("required"),
            ToolChoice::Tool(name) => write!(f, "tool:{}", name),
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}
