//! Scoped declaration sources (input file, process environment)

use crate::scope::ScopedKey;
use std::collections::BTreeMap;
use std::fmt;

pub mod env;
pub mod file;

pub use env::current_environment;
pub use file::load_input_file;

/// Declarations from one source, keyed by their parsed scoped key.
pub type SourceMapping = BTreeMap<ScopedKey, String>;

/// Where a declaration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    InputFile,
    Environment,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::InputFile => f.write_str("input file"),
            Origin::Environment => f.write_str("environment"),
        }
    }
}

/// Parse raw `(key, value)` pairs into a [`SourceMapping`].
///
/// Keys that are not valid scoped keys are skipped with a warning.
pub fn collect_scoped<I>(pairs: I, origin: Origin) -> SourceMapping
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut mapping = SourceMapping::new();
    for (raw, value) in pairs {
        match ScopedKey::parse(&raw) {
            Ok(key) => {
                tracing::debug!(
                    "{} declares {} for scopes {:?}",
                    origin,
                    key.raw(),
                    key.scopes().collect::<Vec<_>>()
                );
                mapping.insert(key, value);
            }
            Err(e) => tracing::warn!("Ignoring {} key: {}", origin, e),
        }
    }
    mapping
}
