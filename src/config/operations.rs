//! Options loading, validation, and utility operations.

use super::model::ClientOptions;
use super::types::{ResolutionPolicy, ToolChoice, ToolChoiceMode};
use crate::error::{BriefError, Result};
use std::path::Path;

impl ClientOptions {
    /// Load options from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(ClientOptions)` - Successfully loaded and validated options
    /// * `Err(BriefError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BriefError::ConfigError(format!(
                "failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: ClientOptions = serde_yaml::from_str(yaml)
            .map_err(|e| BriefError::ConfigError(format!("failed to parse options YAML: {}", e)))?;

        options.validate()?;
        Ok(options)
    }

    /// Serialize options to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BriefError::ConfigError(format!("failed to serialize options to YAML: {}", e))
        })
    }

    /// Validate option values.
    ///
    /// Validation rules:
    /// - `forced_tool` must not be empty
    /// - `forced_tool` cannot be combined with `tool_choice: none`
    pub fn validate(&self) -> Result<()> {
        if let Some(ref tool) = self.forced_tool {
            if tool.trim().is_empty() {
                return Err(BriefError::ConfigError(
                    "options validation failed: forced_tool must not be empty".to_string(),
                ));
            }
            if self.tool_choice == ToolChoiceMode::None {
                return Err(BriefError::ConfigError(format!(
                    "options validation failed: forced_tool '{}' conflicts with tool_choice: none",
                    tool
                )));
            }
        }

        Ok(())
    }

    /// Builder-style override of the resolution policy.
    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.instructions = policy;
        self
    }

    /// The tool choice to hand to a downstream client.
    pub fn effective_tool_choice(&self) -> ToolChoice {
        match self.forced_tool {
            Some(ref tool) => ToolChoice::Tool(tool.clone()),
            None => match self.tool_choice {
                ToolChoiceMode::None => ToolChoice::None,
                ToolChoiceMode::Auto => ToolChoice::Auto,
                ToolChoiceMode::Required => ToolChoice::Required,
            },
        }
    }
}
