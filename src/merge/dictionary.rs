//! Scope resolution and source merging

use super::filter::filter_map_keys;
use super::unused::report_unused_keys;
use crate::scope::ScopedKey;
use crate::source::SourceMapping;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Result of resolving one scope against both sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    /// Bare name to value, environment values taking precedence.
    pub variables: BTreeMap<String, String>,
    /// Names supplied by both sources, in the order they were overridden.
    pub collisions: Vec<String>,
    /// Declared names that did not resolve; only computed in strict mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused: Option<BTreeSet<String>>,
}

impl MergeOutcome {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

pub fn collision_message(name: &str) -> String {
    format!("<<{}>>: key and scope specified as env and input file var. env var will be used.", name)
}

/// Declarations from `mapping` that apply to `scope`, keyed by bare name.
pub fn scoped_subset(scope: &str, mapping: &SourceMapping) -> BTreeMap<String, String> {
    filter_map_keys(mapping, |key| key.matches_scope(scope), |key: &ScopedKey| key.name().to_string())
}

/// Merge the declarations of `input` and `environment` that apply to `scope`.
///
/// Environment values overwrite input file values sharing a bare name, with one
/// warning per overridden name. With `strict`, declared names that did not
/// resolve are reported as well.
pub fn build_dictionary(
    scope: &str,
    input: &SourceMapping,
    environment: &SourceMapping,
    strict: bool,
) -> MergeOutcome {
    let input_scoped = scoped_subset(scope, input);
    let environment_scoped = scoped_subset(scope, environment);
    tracing::debug!(
        "Scope {}: {} input file matches, {} environment matches",
        scope,
        input_scoped.len(),
        environment_scoped.len()
    );

    let mut variables = input_scoped;
    let mut collisions = Vec::new();
    for (name, value) in environment_scoped {
        if variables.contains_key(&name) {
            tracing::warn!("{}", collision_message(&name));
            collisions.push(name.clone());
        }
        variables.insert(name, value);
    }

    let unused = strict.then(|| report_unused_keys(input, environment, &variables));

    MergeOutcome { variables, collisions, unused }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{collect_scoped, Origin};

    fn source(pairs: &[(&str, &str)]) -> SourceMapping {
        collect_scoped(
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
            Origin::InputFile,
        )
    }

    fn merged(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_full_scenario_environment_overrides_file() {
        let input = source(&[("port@dev stage", "8080"), ("host@prod", "example.com")]);
        let env = source(&[("port@dev", "9090")]);

        let outcome = build_dictionary("dev", &input, &env, false);
        similar_asserts::assert_eq!(outcome.variables, merged(&[("port", "9090")]));
        assert_eq!(outcome.collisions, vec!["port".to_string()]);
        assert_eq!(outcome.unused, None);
    }

    #[test]
    fn test_strict_reports_unused_keys() {
        let input = source(&[("a@X", "1"), ("b@Y", "2")]);
        let env = SourceMapping::new();

        let outcome = build_dictionary("X", &input, &env, true);
        assert_eq!(outcome.variables, merged(&[("a", "1")]));
        let unused = outcome.unused.expect("strict mode computes unused keys");
        assert_eq!(unused.into_iter().collect::<Vec<_>>(), vec!["b".to_string()]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let outcome = build_dictionary("X", &SourceMapping::new(), &SourceMapping::new(), true);
        assert!(outcome.is_empty());
        assert!(outcome.collisions.is_empty());
        assert_eq!(outcome.unused, Some(BTreeSet::new()));
    }

    #[test]
    fn test_empty_source_yields_other_subset() {
        let only = source(&[("a@dev", "1"), ("b@prod", "2")]);
        let from_input = build_dictionary("dev", &only, &SourceMapping::new(), false);
        let from_env = build_dictionary("dev", &SourceMapping::new(), &only, false);
        assert_eq!(from_input.variables, merged(&[("a", "1")]));
        assert_eq!(from_env.variables, from_input.variables);
        assert!(from_env.collisions.is_empty());
    }

    #[test]
    fn test_scope_matching_ignores_case() {
        let input = source(&[("url@Prod", "https://example.com")]);
        let outcome = build_dictionary("PROD", &input, &SourceMapping::new(), false);
        assert_eq!(outcome.variables, merged(&[("url", "https://example.com")]));
    }

    #[test]
    fn test_one_collision_per_name() {
        let input = source(&[("a@dev", "1"), ("a@dev qa", "2"), ("b@dev", "3")]);
        let env = source(&[("a@dev", "env-a"), ("b@DEV", "env-b"), ("c@dev", "env-c")]);

        let outcome = build_dictionary("dev", &input, &env, false);
        assert_eq!(outcome.variables, merged(&[("a", "env-a"), ("b", "env-b"), ("c", "env-c")]));
        assert_eq!(outcome.collisions, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_file_value_still_collides() {
        let input = source(&[("a@dev", "")]);
        let env = source(&[("a@dev", "set")]);
        let outcome = build_dictionary("dev", &input, &env, false);
        assert_eq!(outcome.collisions, vec!["a".to_string()]);
        assert_eq!(outcome.variables, merged(&[("a", "set")]));
    }

    #[test]
    fn test_disjoint_names_independent_of_declaration_order() {
        let forward = source(&[("a@dev", "1"), ("b@dev", "2"), ("c@dev", "3")]);
        let reverse = source(&[("c@dev", "3"), ("b@dev", "2"), ("a@dev", "1")]);
        let env = source(&[("d@dev", "4")]);
        assert_eq!(
            build_dictionary("dev", &forward, &env, false),
            build_dictionary("dev", &reverse, &env, false)
        );
    }

    #[test]
    fn test_same_source_duplicate_resolved_by_key_order() {
        let input = source(&[("port@dev stage", "wide"), ("port@dev", "narrow")]);
        let outcome = build_dictionary("dev", &input, &SourceMapping::new(), false);
        assert_eq!(outcome.variables, merged(&[("port", "wide")]));
        assert!(outcome.collisions.is_empty());
    }
}
