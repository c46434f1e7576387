//! Error types for brief.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Template anomalies are deliberately absent here: they never reach callers.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for brief operations.
#[derive(Error, Debug)]
pub enum BriefError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Agent construction failed: unknown agent, undeterminable identity,
    /// or an unreadable/malformed manifest or options file.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The message list handed to an invocation was empty or blank.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An invocation completed with a failed report.
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),
}

impl BriefError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BriefError::UserError(_) => exit_codes::USER_ERROR,
            BriefError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            BriefError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            BriefError::ResolutionFailed(_) => exit_codes::RESOLUTION_FAILURE,
        }
    }
}

/// Result type alias for brief operations.
pub type Result<T> = std::result::Result<T, BriefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = BriefError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = BriefError::ConfigError("agent 'x' not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn invalid_input_has_correct_exit_code() {
        let err = BriefError::InvalidInput("messages cannot be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn resolution_failed_has_correct_exit_code() {
        let err = BriefError::ResolutionFailed("boom".to_string());
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = BriefError::ConfigError("unknown agent 'ghost'".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown agent 'ghost'");

        let err = BriefError::InvalidInput("messages cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: messages cannot be empty");
    }
}
