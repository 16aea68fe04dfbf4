//! Run command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::resolve::{annotate_warnings, enforce_match, resolve, ResolveArgs};
use super::utils::non_empty;
use crate::publish::{publish, GithubPublisher};
use crate::source::current_environment;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Environment file command path (written as workflow commands on stdout when unset)
    #[arg(long, env = "GITHUB_ENV", value_name = "PATH")]
    pub github_env: Option<String>,

    /// Output file command path (written as workflow commands on stdout when unset)
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<String>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = args.resolve.to_config();
    config.validate()?;

    let outcome = resolve(&config, &current_environment())?;
    annotate_warnings(&outcome);

    let mut publisher = GithubPublisher::new(
        non_empty(&args.github_env).map(PathBuf::from),
        non_empty(&args.github_output).map(PathBuf::from),
    );
    publish(&outcome.variables, &mut publisher, config.create_output_variables)
        .context("Failed to publish scoped variables")?;

    enforce_match(&config, &outcome)
}
