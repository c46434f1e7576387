//! Invocation inputs and results.
//!
//! A [`MessageList`] normalizes the caller's message input; an
//! [`ExecutionReport`] is built fresh for every invocation and never mutated
//! afterwards.

use crate::agent::prompt::VariableBindings;
use crate::error::{BriefError, Result};
use serde::{Deserialize, Serialize};

/// Messages handed to an invocation. A single message becomes a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageList(Vec<String>);

impl MessageList {
    /// Fail unless at least one message has non-whitespace content.
    pub fn validate(&self) -> Result<()> {
        if self.0.iter().all(|m| m.trim().is_empty()) {
            return Err(BriefError::InvalidInput(
                "messages cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for MessageList {
    fn from(message: &str) -> Self {
        Self(vec![message.to_string()])
    }
}

impl From<String> for MessageList {
    fn from(message: String) -> Self {
        Self(vec![message])
    }
}

impl From<Vec<String>> for MessageList {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl From<Vec<&str>> for MessageList {
    fn from(messages: Vec<&str>) -> Self {
        Self(messages.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for MessageList {
    fn from(messages: &[&str]) -> Self {
        Self(messages.iter().map(|m| m.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MessageList {
    fn from(messages: [&str; N]) -> Self {
        Self(messages.iter().map(|m| m.to_string()).collect())
    }
}

/// Snapshot of what an invocation worked with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportState {
    /// The caller's messages, normalized to a list.
    pub messages: MessageList,

    /// Per-template resolved text, in join order. `None` when resolution
    /// did not complete.
    pub parsed_instructions: Option<Vec<String>>,

    /// The bindings the invocation resolved against.
    pub template_variables: VariableBindings,
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// The joined resolved instruction text. `None` on failure.
    pub value: Option<String>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub state: ReportState,
}

impl ExecutionReport {
    pub(crate) fn succeeded(
        value: String,
        messages: MessageList,
        parsed_instructions: Vec<String>,
        template_variables: VariableBindings,
    ) -> Self {
        Self {
            value: Some(value),
            success: true,
            error: None,
            state: ReportState {
                messages,
                parsed_instructions: Some(parsed_instructions),
                template_variables,
            },
        }
    }

    pub(crate) fn failed(
        error: String,
        messages: MessageList,
        template_variables: VariableBindings,
    ) -> Self {
        Self {
            value: None,
            success: false,
            error: Some(error),
            state: ReportState {
                messages,
                parsed_instructions: None,
                template_variables,
            },
        }
    }

    /// The resolved instruction text, or a `ResolutionFailed` error for a
    /// failed report.
    pub fn instructions(&self) -> Result<&str> {
        match (&self.value, self.success) {
            (Some(value), true) => Ok(value),
            _ => Err(BriefError::ResolutionFailed(
                self.error
                    .clone()
                    .unwrap_or_else(|| "instructions were not computed".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::prompt::vars;

    #[test]
    fn test_single_message_normalized() {
        let messages = MessageList::from("hello");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_empty_messages_rejected() {
        let err = MessageList::from(Vec::<String>::new()).validate().unwrap_err();
        assert!(matches!(err, BriefError::InvalidInput(_)));
        assert!(err.to_string().contains("messages cannot be empty"));
    }

    #[test]
    fn test_blank_messages_rejected() {
        let err = MessageList::from(vec!["   ", "\n\t", ""]).validate().unwrap_err();
        assert!(matches!(err, BriefError::InvalidInput(_)));
    }

    #[test]
    fn test_one_non_blank_message_is_enough() {
        assert!(MessageList::from(vec!["", " ", "hi"]).validate().is_ok());
    }

    #[test]
    fn test_failed_report_instructions_error() {
        let report = ExecutionReport::failed(
            "boom".to_string(),
            MessageList::from("hi"),
            VariableBindings::new(),
        );
        let err = report.instructions().unwrap_err();
        assert!(matches!(err, BriefError::ResolutionFailed(ref m) if m == "boom"));
    }

    #[test]
    fn test_report_serializes_state() {
        let report = ExecutionReport::succeeded(
            "Hello Eve".to_string(),
            MessageList::from("In the beginning..."),
            vec!["Hello Eve".to_string()],
            vars([("name", "Eve")]),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["value"], "Hello Eve");
        assert!(json.get("error").is_none());
        assert_eq!(json["state"]["messages"][0], "In the beginning...");
        assert_eq!(json["state"]["parsed_instructions"][0], "Hello Eve");
        assert_eq!(json["state"]["template_variables"]["name"], "Eve");
    }

    #[test]
    fn test_failed_report_serializes_null_instructions() {
        let report = ExecutionReport::failed(
            "boom".to_string(),
            MessageList::from("hi"),
            VariableBindings::new(),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["value"].is_null());
        assert!(json["state"]["parsed_instructions"].is_null());
        assert_eq!(json["error"], "boom");
    }
}
