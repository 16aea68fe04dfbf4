//! Scoped declarations from process environment variables

use super::{collect_scoped, Origin, SourceMapping};
use crate::merge::filter::filter_keys;
use crate::scope::key::SCOPE_SEPARATOR;
use std::collections::BTreeMap;

/// Scan the current process environment for scoped variables.
pub fn current_environment() -> SourceMapping {
    let vars = std::env::vars_os().filter_map(|(key, value)| {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                tracing::debug!("Skipping environment variable {} with non UTF-8 value", key);
                None
            }
            _ => None,
        }
    });
    scoped_variables(vars)
}

/// Keep only variables whose name carries a scope separator.
pub fn scoped_variables<I>(vars: I) -> SourceMapping
where
    I: IntoIterator<Item = (String, String)>,
{
    let all: BTreeMap<String, String> = vars.into_iter().collect();
    let candidates = filter_keys(&all, |key| key.contains(SCOPE_SEPARATOR));
    tracing::debug!("Found {} scoped environment variables", candidates.len());
    collect_scoped(candidates, Origin::Environment)
}
