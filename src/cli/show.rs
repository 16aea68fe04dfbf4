//! Show command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::resolve::{enforce_match, resolve, ResolveArgs};
use crate::merge::MergeOutcome;
use crate::source::current_environment;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    scope: &'a str,
    #[serde(flatten)]
    outcome: &'a MergeOutcome,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let config = args.resolve.to_config();
    config.validate()?;

    let outcome = resolve(&config, &current_environment())?;

    let report = ShowReport { scope: &config.scope, outcome: &outcome };
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", json);

    enforce_match(&config, &outcome)
}
