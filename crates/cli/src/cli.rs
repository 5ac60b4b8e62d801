//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Upper bound on `simulate --steps`.
pub const MAX_SIMULATION_STEPS: i64 = 100_000;

/// Adaptive IRM CLI - Quote and simulate adaptive curve borrow rates
#[derive(Parser, Debug)]
#[command(name = "airm")]
#[command(about = "CLI tool for exploring adaptive curve borrow rates", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Curve configuration file (JSON, fields default to protocol constants)
    #[arg(long, global = true, env = "AIRM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the borrow rate for one interval
    Quote(QuoteArgs),
    /// Run a market through repeated rate updates
    Simulate(SimulateArgs),
    /// Compute the identifier of a market
    #[command(name = "market-id")]
    MarketId(MarketIdArgs),
}

#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Total supplied assets in human-readable units (e.g., "1000.5")
    #[arg(long)]
    pub supply: String,

    /// Total borrowed assets in human-readable units
    #[arg(long)]
    pub borrow: String,

    /// Decimals of the loan token
    #[arg(long, default_value = "18")]
    pub decimals: u8,

    /// Seconds since the market's last update
    #[arg(long, default_value = "0")]
    pub elapsed: u64,

    /// Stored rate at target (WAD per second); omit for a market's first touch
    #[arg(long)]
    pub rate_at_target: Option<String>,
}

#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Initial supplied assets in human-readable units
    #[arg(long)]
    pub supply: String,

    /// Initial borrowed assets in human-readable units
    #[arg(long)]
    pub borrow: String,

    /// Decimals of the loan token
    #[arg(long, default_value = "18")]
    pub decimals: u8,

    /// Number of updates to run
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(..=MAX_SIMULATION_STEPS))]
    pub steps: u32,

    /// Seconds between updates
    #[arg(long, default_value = "86400")]
    pub interval: u64,

    /// Keep totals fixed instead of accruing interest into them
    #[arg(long)]
    pub no_accrue: bool,
}

#[derive(Parser, Debug)]
pub struct MarketIdArgs {
    /// Loan token address
    #[arg(long)]
    pub loan_token: String,

    /// Collateral token address
    #[arg(long)]
    pub collateral_token: String,

    /// Oracle address
    #[arg(long)]
    pub oracle: String,

    /// Interest rate model address
    #[arg(long)]
    pub irm: String,

    /// Loan-to-value ratio as a decimal (e.g., "0.86")
    #[arg(long)]
    pub ltv: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
