//! Adaptive IRM CLI - Quote and simulate adaptive curve borrow rates.

mod cli;
mod commands;
mod output;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{load_config, run_market_id, run_quote, run_simulate};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Quote(args) => {
            run_quote(args, cli.format, &config)?;
        }
        Commands::Simulate(args) => {
            run_simulate(args, cli.format, &config)?;
        }
        Commands::MarketId(args) => {
            run_market_id(args, cli.format)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
