//! GitHub Actions workflow command formatting
//!
//! Two wire forms exist: file commands appended to the files named by
//! `GITHUB_ENV` / `GITHUB_OUTPUT`, and the legacy `::name key=value::data`
//! lines written to stdout.

use super::PublishError;
use uuid::Uuid;

/// A fresh heredoc delimiter for one file command record.
pub fn new_delimiter() -> String {
    format!("ghadelimiter_{}", Uuid::new_v4())
}

/// Format a `NAME<<DELIMITER` record for a file command.
pub fn key_value_message(name: &str, value: &str, delimiter: &str) -> Result<String, PublishError> {
    if name.contains(delimiter) {
        return Err(PublishError::DelimiterInName { delimiter: delimiter.to_string() });
    }
    if value.contains(delimiter) {
        return Err(PublishError::DelimiterInValue { delimiter: delimiter.to_string() });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Format a legacy workflow command line (without trailing newline).
pub fn workflow_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");
    if !properties.is_empty() {
        let props: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

pub fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
