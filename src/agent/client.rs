//! Hand-off value for downstream chat clients.
//!
//! No model client lives here: adapters for a specific orchestration
//! framework consume a [`ClientRequest`] and build whatever native object
//! they need. Tools and tool choice pass through untouched.

use crate::agent::report::ExecutionReport;
use crate::config::{ClientOptions, ToolChoice};
use crate::error::Result;
use serde::Serialize;

/// Everything a chat client needs to run one turn for an agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRequest {
    /// Resolved instruction text for the client's system slot.
    pub system_instructions: String,
    /// Conversation messages that follow the system instructions.
    pub messages: Vec<String>,
    pub tools: Vec<String>,
    pub tool_choice: ToolChoice,
    pub parallel_tool_calls: bool,
}

impl ClientRequest {
    /// Package a successful report.
    ///
    /// Fails with `ResolutionFailed` when the report did not succeed.
    pub fn from_report(
        report: &ExecutionReport,
        tools: &[String],
        options: &ClientOptions,
    ) -> Result<Self> {
        let system_instructions = report.instructions()?.to_string();
        Ok(Self {
            system_instructions,
            messages: report.state.messages.iter().map(str::to_string).collect(),
            tools: tools.to_vec(),
            tool_choice: options.effective_tool_choice(),
            parallel_tool_calls: options.parallel_tool_execution,
        })
    }
}
