//! Publishing merged variables to later pipeline steps

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub mod command;
pub mod github;

pub use github::GithubPublisher;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to write file command to {path}: {source}")]
    CommandFile { path: PathBuf, source: io::Error },

    #[error("Failed to write workflow command: {0}")]
    Stdout(io::Error),

    #[error("Unexpected input: name should not contain the delimiter \"{delimiter}\"")]
    DelimiterInName { delimiter: String },

    #[error("Unexpected input: value should not contain the delimiter \"{delimiter}\"")]
    DelimiterInValue { delimiter: String },
}

/// Sink for resolved variables.
pub trait Publisher {
    /// Make `name` available as an environment variable to later steps.
    fn export_variable(&mut self, name: &str, value: &str) -> Result<(), PublishError>;

    /// Expose `name` as an output of the current step.
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), PublishError>;
}

/// Export every variable, and also set it as a step output when
/// `create_outputs` is on.
pub fn publish<P: Publisher + ?Sized>(
    variables: &BTreeMap<String, String>,
    publisher: &mut P,
    create_outputs: bool,
) -> Result<(), PublishError> {
    for (name, value) in variables {
        publisher.export_variable(name, value)?;
        tracing::info!("Set {} = {}", name, value);
        if create_outputs {
            publisher.set_output(name, value)?;
            tracing::debug!("Set output {}", name);
        }
    }
    Ok(())
}
