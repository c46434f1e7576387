//! Agent identity resolution.
//!
//! Decides which manifest entry (if any) an agent under construction binds to.
//!
//! # Resolution Order
//!
//! 1. Explicit instructions: manifest lookup is bypassed entirely
//! 2. Explicit identifier: looked up in the manifest
//! 3. Ambient context: the identifier registered for the current construction
//! 4. Error if the identity cannot be determined

use crate::agent::manifest::{AgentKind, AgentManifest, DEFAULT_VERSION, ManifestRegistry};
use crate::agent::prompt::InstructionSet;
use crate::error::{BriefError, Result};
use tracing::debug;

/// Environment variable naming the agent being constructed.
pub const AGENT_ENV_VAR: &str = "BRIEF_AGENT";

/// Name given to agents built from explicit instructions alone.
pub const DEFAULT_AGENT_NAME: &str = "task-execution";

/// Description given to agents built from explicit instructions alone.
pub const DEFAULT_AGENT_DESCRIPTION: &str = "A task execution agent that helps execute tasks.";

/// Identifies "which agent is currently being constructed" without any
/// call-stack inspection: whoever drives construction registers the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmbientContext {
    current: Option<String>,
}

impl AmbientContext {
    /// Context for the named agent.
    pub fn new(agent: impl Into<String>) -> Self {
        let agent = agent.into();
        Self {
            current: (!agent.trim().is_empty()).then_some(agent),
        }
    }

    /// Context with no registered agent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context registered through the `BRIEF_AGENT` environment variable.
    pub fn from_env() -> Self {
        std::env::var(AGENT_ENV_VAR)
            .map(Self::new)
            .unwrap_or_default()
    }

    /// The registered agent, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Where an agent's identity and discovered instructions come from.
#[derive(Debug, Clone)]
pub enum AgentSource {
    /// Use these instructions directly; no manifest lookup.
    Instructions(InstructionSet),
    /// Look up this identifier in the manifest.
    Identifier(String),
    /// Look up whichever agent the context registers.
    Ambient(AmbientContext),
}

/// How an agent binding was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// Built from explicit instructions.
    Explicit,
    /// Looked up by explicit identifier.
    Identifier,
    /// Looked up via the ambient context.
    Ambient,
}

/// Resolved identity for an agent under construction.
#[derive(Debug, Clone)]
pub struct AgentBinding {
    /// Manifest metadata (default metadata for explicit instructions).
    pub manifest: AgentManifest,
    /// How the binding was resolved.
    pub binding_source: BindingSource,
}

/// Resolve an agent source into its manifest.
///
/// # Errors
///
/// - Identifier not declared in the manifest
/// - Ambient context carries no agent
/// - Lookup requested without a manifest
pub fn resolve_agent(
    source: AgentSource,
    registry: Option<&ManifestRegistry>,
) -> Result<AgentBinding> {
    let (id, binding_source) = match source {
        AgentSource::Instructions(instructions) => {
            return Ok(AgentBinding {
                manifest: default_manifest(instructions),
                binding_source: BindingSource::Explicit,
            });
        }
        AgentSource::Identifier(id) => (id, BindingSource::Identifier),
        AgentSource::Ambient(ctx) => match ctx.current {
            Some(id) => (id, BindingSource::Ambient),
            None => {
                return Err(BriefError::ConfigError(format!(
                    "cannot determine which agent is being constructed.\n\
                     Pass an explicit agent identifier or set {}.",
                    AGENT_ENV_VAR
                )));
            }
        },
    };

    let registry = registry.ok_or_else(|| {
        BriefError::ConfigError(format!(
            "agent '{}' requires a manifest, but none was provided.\n\n\
             Example agents.yaml:\n\
             agents:\n  \
               {}:\n    \
                 description: \"What this agent does\"\n    \
                 instructions:\n      \
                   - \"Remember {{var1}} in your response.\"",
            id, id
        ))
    })?;

    let manifest = registry.lookup(&id)?;
    debug!(
        agent = %id,
        version = %manifest.version,
        instructions = manifest.instructions.len(),
        "resolved agent from manifest"
    );

    Ok(AgentBinding {
        manifest,
        binding_source,
    })
}

/// Metadata for an agent built from explicit instructions alone.
pub(crate) fn default_manifest(instructions: InstructionSet) -> AgentManifest {
    AgentManifest {
        name: DEFAULT_AGENT_NAME.to_string(),
        kind: AgentKind::Agent,
        version: DEFAULT_VERSION.to_string(),
        description: DEFAULT_AGENT_DESCRIPTION.to_string(),
        instructions,
    }
}
