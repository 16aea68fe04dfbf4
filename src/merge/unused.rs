//! Declared-but-unused key reporting

use crate::source::SourceMapping;
use std::collections::{BTreeMap, BTreeSet};

/// Bare names declared in any source that did not make it into `merged`.
pub fn unused_keys(sources: &[&SourceMapping], merged: &BTreeMap<String, String>) -> BTreeSet<String> {
    sources
        .iter()
        .flat_map(|source| source.keys())
        .map(|key| key.name())
        .filter(|name| !merged.contains_key(*name))
        .map(str::to_string)
        .collect()
}

pub fn unused_message(name: &str) -> String {
    format!("<<{}>>: key is declared but not used in the requested scope.", name)
}

/// Compute the unused names and warn about each one.
pub fn report_unused_keys(
    input: &SourceMapping,
    environment: &SourceMapping,
    merged: &BTreeMap<String, String>,
) -> BTreeSet<String> {
    let unused = unused_keys(&[input, environment], merged);
    for name in &unused {
        tracing::warn!("{}", unused_message(name));
    }
    unused
}
