// ABOUTME: Entry point for the imgrm CLI application.
// ABOUTME: Parses arguments, loads config and dispatches to command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use imgrm::config::Config;
use imgrm::error::{Error, Result};
use imgrm::output::{Output, OutputMode};
use nonempty::NonEmpty;
use std::future::Future;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    let result = until_interrupted(run(cli, mode), tokio::signal::ctrl_c()).await;

    if let Err(e) = result {
        Output::stdio(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

/// Race `work` against an interrupt signal.
///
/// A signal listener that fails to install disables its branch, so the
/// work keeps running to completion.
async fn until_interrupted<F, S>(work: F, signal: S) -> Result<()>
where
    F: Future<Output = Result<()>>,
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = work => result,
        Ok(()) = signal => Err(Error::Interrupted),
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?
        .with_env()?
        .with_overrides(cli.runtime, cli.socket);

    match cli.command {
        Commands::Rm {
            force,
            no_prune,
            images,
        } => {
            let images = NonEmpty::from_vec(images)
                .ok_or_else(|| Error::InvalidConfig("at least one image is required".into()))?;
            let options = config.remove_options(force, no_prune);
            commands::remove(&config, &images, options, Output::stdio(mode)).await
        }
    }
}
