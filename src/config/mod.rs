//! Invocation configuration
//!
//! Holds the validated step inputs and the no-match failure rule. Inputs come
//! from CLI flags, falling back to the `INPUT_*` variables the Actions runner
//! sets for each step input.

use crate::merge::MergeOutcome;
use std::path::PathBuf;
use thiserror::Error;

/// Failure message used when no custom one is configured.
pub const DEFAULT_NO_MATCH_MESSAGE: &str = "No variable scope matches.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("{0}")]
    NoMatch(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionConfig {
    pub scope: String,
    pub input_file: Option<PathBuf>,
    pub create_output_variables: bool,
    pub error_on_no_match: bool,
    pub custom_error_message: Option<String>,
}

impl ActionConfig {
    /// Check required inputs and log a notice for inputs that will be ignored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scope.trim().is_empty() {
            return Err(ConfigError::MissingInput("scope"));
        }
        if !self.error_on_no_match && self.custom_error_message.is_some() {
            tracing::info!("custom-error-message is specified, but error-on-no-match is not.");
        }
        Ok(())
    }

    /// Report unused keys only when a match is required.
    pub fn strict(&self) -> bool {
        self.error_on_no_match
    }

    pub fn no_match_message(&self) -> &str {
        self.custom_error_message.as_deref().unwrap_or(DEFAULT_NO_MATCH_MESSAGE)
    }

    /// Fail when a match was required and nothing resolved.
    pub fn check_outcome(&self, outcome: &MergeOutcome) -> Result<(), ConfigError> {
        if self.error_on_no_match && outcome.is_empty() {
            return Err(ConfigError::NoMatch(self.no_match_message().to_string()));
        }
        Ok(())
    }
}
