//! Publisher speaking the GitHub Actions runner protocol

use super::command::{key_value_message, new_delimiter, workflow_command};
use super::{PublishError, Publisher};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes variables to the runner's command files, or to stdout as legacy
/// workflow commands when no file is configured.
pub struct GithubPublisher<W: Write> {
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    stdout: W,
}

impl GithubPublisher<io::Stdout> {
    pub fn new(env_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        Self::with_writer(env_file, output_file, io::stdout())
    }
}

impl<W: Write> GithubPublisher<W> {
    pub fn with_writer(env_file: Option<PathBuf>, output_file: Option<PathBuf>, stdout: W) -> Self {
        Self { env_file, output_file, stdout }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.stdout
    }

    fn write_line(&mut self, line: &str) -> Result<(), PublishError> {
        writeln!(self.stdout, "{}", line).map_err(PublishError::Stdout)
    }
}

fn append_file_command(path: &Path, name: &str, value: &str) -> Result<(), PublishError> {
    let message = key_value_message(name, value, &new_delimiter())?;
    let io_err = |source| PublishError::CommandFile { path: path.to_path_buf(), source };
    let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(io_err)?;
    file.write_all(message.as_bytes()).map_err(io_err)
}

impl<W: Write> Publisher for GithubPublisher<W> {
    fn export_variable(&mut self, name: &str, value: &str) -> Result<(), PublishError> {
        match &self.env_file {
            Some(path) => append_file_command(path, name, value),
            None => self.write_line(&workflow_command("set-env", &[("name", name)], value)),
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), PublishError> {
        match &self.output_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                self.write_line("")?;
                self.write_line(&workflow_command("set-output", &[("name", name)], value))
            }
        }
    }
}
