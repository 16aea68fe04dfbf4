//! Shared CLI utilities.

/// Trim an optional string input, treating blank values as absent.
///
/// The Actions runner sets `INPUT_*` for every declared input, so an unset
/// input arrives as an empty string.
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Parse a boolean step input using the YAML 1.2 core schema spellings the
/// runner accepts. A blank value is `false`.
pub fn parse_bool_input(value: &str) -> Result<bool, String> {
    match value.trim() {
        "" | "false" | "False" | "FALSE" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        other => Err(format!(
            "'{}' is not a boolean. Supported values: true | True | TRUE | false | False | FALSE",
            other
        )),
    }
}
