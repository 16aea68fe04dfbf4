//! scoped-env: Resolve scope-tagged variables for CI pipeline steps
//!
//! Reads `name@scope1 scope2` declarations from an input file and the process
//! environment, keeps the ones that apply to the requested scope, and publishes
//! them as environment (and optionally output) variables for later steps.

use anyhow::Result;

mod cli;
mod config;
mod merge;
mod publish;
mod scope;
mod source;

fn main() -> Result<()> {
    cli::run()
}
