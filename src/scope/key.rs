//! Scoped key representation
//!
//! A scoped key binds a bare variable name to the set of scopes it applies to:
//! `port@dev stage` declares `port` for the `DEV` and `STAGE` scopes. Keys are
//! parsed once into a [`ScopedKey`] so matching never re-splits strings.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the bare name and the scope list.
pub const SCOPE_SEPARATOR: char = '@';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopedKeyError {
    #[error("key '{0}' has no '@' scope separator")]
    MissingSeparator(String),

    #[error("key '{0}' has more than one '@' separator")]
    MultipleSeparators(String),

    #[error("key '{0}' has an empty variable name")]
    EmptyName(String),

    #[error("key '{0}' does not list any scope")]
    NoScopes(String),
}

/// A parsed `name@scopes` key.
///
/// Ordering is by name, then scope set, then the raw text, which keeps
/// every map keyed by `ScopedKey` deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopedKey {
    name: String,
    scopes: BTreeSet<String>,
    raw: String,
}

impl ScopedKey {
    pub fn parse(raw: &str) -> Result<Self, ScopedKeyError> {
        let Some((name, scope_list)) = raw.split_once(SCOPE_SEPARATOR) else {
            return Err(ScopedKeyError::MissingSeparator(raw.to_string()));
        };
        if scope_list.contains(SCOPE_SEPARATOR) {
            return Err(ScopedKeyError::MultipleSeparators(raw.to_string()));
        }

        if name.is_empty() {
            return Err(ScopedKeyError::EmptyName(raw.to_string()));
        }

        let scopes: BTreeSet<String> = scope_list.split_whitespace().map(normalize_scope).collect();
        if scopes.is_empty() {
            return Err(ScopedKeyError::NoScopes(raw.to_string()));
        }

        Ok(Self { name: name.to_string(), scopes, raw: raw.to_string() })
    }

    /// The bare variable name, with the scope list stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper-cased scope tags, sorted.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when `scope` is one of this key's scopes, ignoring case.
    pub fn matches_scope(&self, scope: &str) -> bool {
        self.scopes.contains(&normalize_scope(scope))
    }
}

impl FromStr for ScopedKey {
    type Err = ScopedKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScopedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Canonical form of a scope tag.
pub fn normalize_scope(scope: &str) -> String {
    scope.to_uppercase()
}
