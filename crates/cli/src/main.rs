//! brewtap CLI
//!
//! Publishes the Homebrew formula for a release to a tap repository.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;
mod tracing;

use crate::commands::Output;
use crate::tracing::{TracingConfig, init_tracing};

fn main() -> miette::Result<()> {
    let cli = cli::parse();

    init_tracing(TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
    })?;

    // Stages run strictly in sequence; a single thread is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| miette::miette!("Failed to start async runtime: {e}"))?;

    match runtime.block_on(commands::execute(cli.command))? {
        Output::Published(result) => println!("{}", result.message),
        Output::Formula(formula) => print!("{formula}"),
    }

    Ok(())
}
