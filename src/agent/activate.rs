//! Agents ready for invocation.
//!
//! An [`Agent`] is built once (possibly reading a manifest) and is immutable
//! afterwards. Invocations take their bindings as arguments and return a
//! fresh report, so a single agent can be shared across threads without
//! locking.

use crate::agent::binding::{
    AgentBinding, AgentSource, AmbientContext, default_manifest, resolve_agent,
};
use crate::agent::client::ClientRequest;
use crate::agent::manifest::{AgentKind, AgentManifest, ManifestRegistry};
use crate::agent::prompt::{self, InstructionSet, VariableBindings};
use crate::agent::report::{ExecutionReport, MessageList};
use crate::config::ClientOptions;
use crate::error::Result;

/// A constructed agent.
#[derive(Debug, Clone)]
pub struct Agent {
    manifest: AgentManifest,
    provided: Option<InstructionSet>,
    options: ClientOptions,
    tools: Vec<String>,
}

impl Agent {
    /// Build an agent from a source, looking it up in `registry` when needed.
    pub fn build(source: AgentSource, registry: Option<&ManifestRegistry>) -> Result<Self> {
        let AgentBinding { manifest, .. } = resolve_agent(source, registry)?;
        Ok(Self {
            manifest,
            provided: None,
            options: ClientOptions::default(),
            tools: Vec::new(),
        })
    }

    /// Build an agent that uses `instructions` directly, with default metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use brief::agent::{Agent, prompt::vars};
    ///
    /// let agent = Agent::from_instructions("Remember {var1} and also {var2} in your response.");
    /// let report = agent
    ///     .invoke(
    ///         "In the beginning...",
    ///         vars([("var1", "Adam"), ("var2", "Eve"), ("var3", "bye")]),
    ///     )
    ///     .unwrap();
    ///
    /// assert!(report.success);
    /// assert_eq!(
    ///     report.value.as_deref(),
    ///     Some("Remember Adam and also Eve in your response.")
    /// );
    /// ```
    pub fn from_instructions(instructions: impl Into<InstructionSet>) -> Self {
        Self {
            manifest: default_manifest(instructions.into()),
            provided: None,
            options: ClientOptions::default(),
            tools: Vec::new(),
        }
    }

    /// Build the agent declared as `id` in `registry`.
    pub fn from_manifest(registry: &ManifestRegistry, id: &str) -> Result<Self> {
        Self::build(AgentSource::Identifier(id.to_string()), Some(registry))
    }

    /// Build whichever agent `ctx` registers.
    pub fn from_ambient(registry: &ManifestRegistry, ctx: &AmbientContext) -> Result<Self> {
        Self::build(AgentSource::Ambient(ctx.clone()), Some(registry))
    }

    /// Caller-supplied instructions, combined with the discovered ones per
    /// the options' resolution policy.
    pub fn with_instructions(mut self, instructions: impl Into<InstructionSet>) -> Self {
        self.provided = Some(instructions.into());
        self
    }

    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Tool names handed unmodified to downstream clients.
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    pub fn kind(&self) -> AgentKind {
        self.manifest.kind
    }

    pub fn version(&self) -> &str {
        &self.manifest.version
    }

    pub fn description(&self) -> &str {
        &self.manifest.description
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// The instructions that apply to this agent, or `None` when none are
    /// configured.
    pub fn instructions(&self) -> Option<InstructionSet> {
        let effective = prompt::effective_instructions(
            &self.manifest.instructions,
            self.provided.as_ref(),
            self.options.instructions,
        );
        (!effective.is_empty()).then_some(effective)
    }

    /// Resolve this agent's instructions for one invocation.
    ///
    /// `run`, `activate` and calling the agent directly all mean this.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `messages` is empty or contains only blank entries.
    /// Any other failure is reported through `ExecutionReport::success`.
    pub fn invoke(
        &self,
        messages: impl Into<MessageList>,
        bindings: VariableBindings,
    ) -> Result<ExecutionReport> {
        prompt::execute(
            &self.manifest.instructions,
            self.provided.as_ref(),
            self.options.instructions,
            messages.into(),
            bindings,
        )
    }

    /// Invoke and package the result for a downstream chat client.
    pub fn prepare(
        &self,
        messages: impl Into<MessageList>,
        bindings: VariableBindings,
    ) -> Result<ClientRequest> {
        let report = self.invoke(messages, bindings)?;
        ClientRequest::from_report(&report, &self.tools, &self.options)
    }
}
