//! Input file loading

use super::{collect_scoped, Origin, SourceMapping};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load scoped declarations from a YAML (or JSON) file, or TOML when the
/// extension is `.toml`.
///
/// The top level must be a mapping; an empty document is an empty mapping.
pub fn load_input_file(path: &Path) -> Result<SourceMapping> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading input file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let pairs = match ext.as_str() {
        "toml" => parse_toml_pairs(&content, path)?,
        _ => parse_yaml_pairs(&content, path)?,
    };
    tracing::debug!("Read {} declarations from {}", pairs.len(), path.display());

    Ok(collect_scoped(pairs, Origin::InputFile))
}

fn parse_yaml_pairs(content: &str, path: &Path) -> Result<Vec<(String, String)>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", path.display()))?;

    let mapping = match untag(raw) {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => anyhow::bail!("Input file must contain a mapping of scoped keys: {}", path.display()),
    };

    mapping
        .into_iter()
        .map(|(key, value)| -> Result<(String, String)> {
            let key = yaml_key(untag(key))
                .with_context(|| format!("Unsupported key in input file {}", path.display()))?;
            let value = yaml_value_to_string(untag(value))?;
            Ok((key, value))
        })
        .collect()
}

fn untag(value: serde_yaml::Value) -> serde_yaml::Value {
    match value {
        serde_yaml::Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => anyhow::bail!("keys must be scalars, found {:?}", other),
    }
}

/// Stringify a value the way it would be exported: scalars verbatim, null as
/// empty, collections as compact JSON.
fn yaml_value_to_string(value: serde_yaml::Value) -> Result<String> {
    Ok(match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_float(f),
            _ => n.to_string(),
        },
        serde_yaml::Value::Bool(b) => b.to_string(),
        collection => serde_json::to_string(&collection)?,
    })
}

/// Render a float as a JavaScript number would print: integral values drop
/// the fraction and non-finite values become `null`.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        "null".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

fn parse_toml_pairs(content: &str, path: &Path) -> Result<Vec<(String, String)>> {
    let table: toml::Table = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", path.display()))?;

    table
        .into_iter()
        .map(|(key, value)| -> Result<(String, String)> {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => format_float(f),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                collection => serde_json::to_string(&collection)?,
            };
            Ok((key, value))
        })
        .collect()
}
