//! Command-line interface for scoped-env
//!
//! Provides `run` (resolve and publish) and `show` (resolve and print) subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod resolve;
mod run;
mod show;
mod utils;

/// Resolve scope-tagged variables from a YAML file and the environment into CI step variables
#[derive(Parser)]
#[command(name = "scoped-env")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a scope and publish the variables to later steps
    Run(Box<run::RunArgs>),

    /// Resolve a scope and print the result as JSON without publishing
    Show(show::ShowArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(std::io::stderr().is_terminal()))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Run(args) => run::run(*args),
        Commands::Show(args) => show::run(args),
    }
}
