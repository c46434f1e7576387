//! Agent manifest schema.
//!
//! This module defines the `agents.yaml` manifest, which declares each agent's
//! metadata and the instruction templates discovered for it.
//!
//! # File Format
//!
//! ```yaml
//! agents:
//!   friendly-assistant:
//!     version: "1.2.0"
//!     description: "A friendly assistant that is keen to help."
//!     instructions:
//!       - "Greet {user} once."
//!       - "Answer in {language}."
//!
//!   weather:
//!     kind: tool
//!     instructions: "Report the weather for {location}."
//! ```
//!
//! `name` defaults to the identifier and `version` to `1.0.0`. `instructions`
//! may be a single string or a list.

use crate::agent::prompt::InstructionSet;
use crate::error::{BriefError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Version assigned to agents that do not declare one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// All agents declared in a manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestRegistry {
    /// Agent entries keyed by identifier.
    #[serde(default)]
    pub agents: BTreeMap<String, AgentEntry>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// What kind of component a manifest entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    #[default]
    Agent,
    Tool,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Agent => f.write_str("agent"),
            AgentKind::Tool => f.write_str("tool"),
        }
    }
}

/// A single agent declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEntry {
    /// Display name. Falls back to the identifier when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default)]
    pub kind: AgentKind,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Instruction templates discovered for this agent.
    #[serde(default)]
    pub instructions: InstructionSet,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for AgentEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: AgentKind::default(),
            version: default_version(),
            description: String::new(),
            instructions: InstructionSet::new(),
            extra: BTreeMap::new(),
        }
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Metadata resolved for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentManifest {
    pub name: String,
    pub kind: AgentKind,
    pub version: String,
    pub description: String,
    pub instructions: InstructionSet,
}

impl AgentEntry {
    /// Display name for this entry.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        if self.name.is_empty() { id } else { &self.name }
    }

    /// Resolve this entry into manifest metadata.
    pub fn to_manifest(&self, id: &str) -> AgentManifest {
        AgentManifest {
            name: self.display_name(id).to_string(),
            kind: self.kind,
            version: self.version.clone(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

impl ManifestRegistry {
    /// Load a manifest from a YAML file.
    ///
    /// Unlike optional configuration, a missing manifest is an error: the
    /// caller asked for lookup and there is nothing to look up in.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BriefError::ConfigError(format!(
                "failed to read agent manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        let registry = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            agents = registry.agent_count(),
            "loaded agent manifest"
        );
        Ok(registry)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let registry: ManifestRegistry = serde_yaml::from_str(yaml).map_err(|e| {
            BriefError::ConfigError(format!("failed to parse agent manifest: {}", e))
        })?;

        registry.validate()?;
        Ok(registry)
    }

    /// Serialize the manifest to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BriefError::ConfigError(format!("failed to serialize agent manifest: {}", e))
        })
    }

    /// Validate the manifest.
    ///
    /// Validation rules:
    /// - Agent identifiers must not be empty
    /// - Versions must not be empty
    pub fn validate(&self) -> Result<()> {
        for (id, entry) in &self.agents {
            if id.trim().is_empty() {
                return Err(BriefError::ConfigError(
                    "manifest validation failed: agent identifier cannot be empty".to_string(),
                ));
            }

            if entry.version.trim().is_empty() {
                return Err(BriefError::ConfigError(format!(
                    "manifest validation failed: agent '{}' has an empty version",
                    id
                )));
            }
        }

        Ok(())
    }

    /// Register an agent programmatically, replacing any entry with the same id.
    pub fn register(&mut self, id: impl Into<String>, entry: AgentEntry) -> Result<()> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BriefError::ConfigError(
                "cannot register an agent with an empty identifier".to_string(),
            ));
        }
        if entry.version.trim().is_empty() {
            return Err(BriefError::ConfigError(format!(
                "cannot register agent '{}' with an empty version",
                id
            )));
        }
        self.agents.insert(id, entry);
        Ok(())
    }

    /// Get an agent entry by identifier.
    pub fn get(&self, id: &str) -> Option<&AgentEntry> {
        self.agents.get(id)
    }

    /// Look up an agent's manifest, failing with a configuration error that
    /// lists the available agents.
    pub fn lookup(&self, id: &str) -> Result<AgentManifest> {
        match self.get(id) {
            Some(entry) => Ok(entry.to_manifest(id)),
            None => Err(BriefError::ConfigError(format!(
                "agent '{}' is not declared in the manifest.\nAvailable agents: {}",
                id,
                self.available_agents()
            ))),
        }
    }

    pub fn has_agents(&self) -> bool {
        !self.agents.is_empty()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Iterate over all agents.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AgentEntry)> {
        self.agents.iter().map(|(id, a)| (id.as_str(), a))
    }

    /// Formatted list of identifiers for error messages.
    pub fn available_agents(&self) -> String {
        if self.agents.is_empty() {
            "(none)".to_string()
        } else {
            self.agents
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
