//! Step inputs and scope resolution shared by `run` and `show`

use anyhow::Result;
use clap::{ArgAction, Args};
use std::path::PathBuf;

use super::utils::{non_empty, parse_bool_input};
use crate::config::ActionConfig;
use crate::merge::{build_dictionary, collision_message, unused_message, MergeOutcome};
use crate::publish::command::workflow_command;
use crate::source::{load_input_file, SourceMapping};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Scope to resolve declarations for (case-insensitive)
    #[arg(short, long, env = "INPUT_SCOPE", value_name = "SCOPE")]
    pub scope: String,

    /// YAML, JSON or TOML file with `name@scopes` declarations
    #[arg(short, long, env = "INPUT_INPUT-FILE", value_name = "PATH")]
    pub input_file: Option<String>,

    /// Also expose every variable as a step output
    #[arg(
        long,
        env = "INPUT_CREATE-OUTPUT-VARIABLES",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool_input
    )]
    pub create_output_variables: bool,

    /// Fail when no variable resolves, and warn about unused declarations
    #[arg(
        long,
        env = "INPUT_ERROR-ON-NO-MATCH",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool_input
    )]
    pub error_on_no_match: bool,

    /// Failure message used with --error-on-no-match
    #[arg(long, env = "INPUT_CUSTOM-ERROR-MESSAGE", value_name = "MESSAGE")]
    pub custom_error_message: Option<String>,
}

impl ResolveArgs {
    pub fn to_config(&self) -> ActionConfig {
        ActionConfig {
            scope: self.scope.trim().to_string(),
            input_file: non_empty(&self.input_file).map(PathBuf::from),
            create_output_variables: self.create_output_variables,
            error_on_no_match: self.error_on_no_match,
            custom_error_message: non_empty(&self.custom_error_message),
        }
    }
}

/// Load the input file (if any) and merge it with `environment` for the
/// configured scope.
pub fn resolve(config: &ActionConfig, environment: &SourceMapping) -> Result<MergeOutcome> {
    let input = match &config.input_file {
        Some(path) => load_input_file(path)?,
        None => SourceMapping::new(),
    };

    let outcome = build_dictionary(&config.scope, &input, environment, config.strict());
    tracing::info!("Scoped Variables: {:?}", outcome.variables);
    Ok(outcome)
}

/// Workflow warning annotations for every collision and unused name.
pub fn warning_annotations(outcome: &MergeOutcome) -> Vec<String> {
    let collisions = outcome.collisions.iter().map(|name| collision_message(name));
    let unused = outcome.unused.iter().flatten().map(|name| unused_message(name));
    collisions.chain(unused).map(|msg| workflow_command("warning", &[], &msg)).collect()
}

/// Surface merge warnings on the step summary when running under Actions.
pub fn annotate_warnings(outcome: &MergeOutcome) {
    if running_in_actions() {
        for annotation in warning_annotations(outcome) {
            println!("{}", annotation);
        }
    }
}

/// Apply the no-match rule, annotating the step when running under Actions.
pub fn enforce_match(config: &ActionConfig, outcome: &MergeOutcome) -> Result<()> {
    if let Err(e) = config.check_outcome(outcome) {
        if running_in_actions() {
            println!("{}", workflow_command("error", &[], &e.to_string()));
        }
        return Err(e.into());
    }
    Ok(())
}

fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::env::scoped_variables;
    use std::fs;
    use tempfile::TempDir;

    fn config(scope: &str, input_file: Option<PathBuf>) -> ActionConfig {
        ActionConfig { scope: scope.to_string(), input_file, ..Default::default() }
    }

    #[test]
    fn test_resolve_merges_file_and_environment() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("vars.yml");
        fs::write(&path, "port@dev stage: 8080\nhost@prod: example.com\n").expect("write");
        let env = scoped_variables(vec![
            ("port@dev".to_string(), "9090".to_string()),
            ("HOME".to_string(), "/root".to_string()),
        ]);

        let outcome = resolve(&config("dev", Some(path)), &env).expect("resolve");
        assert_eq!(outcome.variables.get("port").map(String::as_str), Some("9090"));
        assert_eq!(outcome.variables.len(), 1);
        assert_eq!(outcome.collisions, vec!["port".to_string()]);
    }

    #[test]
    fn test_resolve_without_input_file() {
        let env = scoped_variables(vec![("token@ci".to_string(), "abc".to_string())]);
        let outcome = resolve(&config("CI", None), &env).expect("resolve");
        assert_eq!(outcome.variables.get("token").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_resolve_missing_input_file_errors() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = config("dev", Some(tmp.path().join("missing.yml")));
        assert!(resolve(&cfg, &SourceMapping::new()).is_err());
    }

    #[test]
    fn test_warning_annotations_cover_collisions_and_unused() {
        let outcome = MergeOutcome {
            collisions: vec!["port".to_string()],
            unused: Some(["host".to_string()].into_iter().collect()),
            ..Default::default()
        };
        let annotations = warning_annotations(&outcome);
        assert_eq!(annotations.len(), 2);
        assert!(annotations[0].starts_with("::warning::<<port>>: key and scope specified"));
        assert!(annotations[1].starts_with("::warning::<<host>>: key is declared but not used"));
    }

    #[test]
    fn test_no_annotations_without_warnings() {
        assert!(warning_annotations(&MergeOutcome::default()).is_empty());
    }

    #[test]
    fn test_to_config_normalizes_inputs() {
        let args = ResolveArgs {
            scope: " dev ".to_string(),
            input_file: Some(String::new()),
            create_output_variables: true,
            error_on_no_match: false,
            custom_error_message: Some("  ".to_string()),
        };
        let cfg = args.to_config();
        assert_eq!(cfg.scope, "dev");
        assert_eq!(cfg.input_file, None);
        assert_eq!(cfg.custom_error_message, None);
        assert!(cfg.create_output_variables);
    }
}
