//! Quote command implementation.

use adaptive_irm::{borrow_rate, get_utilization, CurveConfig};
use alloy_primitives::U256;
use anyhow::{Context, Result};

use super::parse_units;
use crate::cli::{OutputFormat, QuoteArgs};
use crate::output::format_quote_detail;
use crate::report::QuoteReport;

/// Parse a stored rate at target, which must lie within the configured bounds.
fn parse_rate_at_target(raw: &str, config: &CurveConfig) -> Result<U256> {
    let rate = raw
        .parse::<U256>()
        .with_context(|| format!("Invalid rate at target: {}", raw))?;

    if rate < config.min_rate_at_target || rate > config.max_rate_at_target {
        anyhow::bail!(
            "Invalid rate at target: {} is outside [{}, {}]",
            rate,
            config.min_rate_at_target,
            config.max_rate_at_target
        );
    }
    Ok(rate)
}

pub fn build_quote(args: &QuoteArgs, config: &CurveConfig) -> Result<QuoteReport> {
    let supply = parse_units(&args.supply, args.decimals)?;
    let borrow = parse_units(&args.borrow, args.decimals)?;

    let start_rate_at_target = args
        .rate_at_target
        .as_deref()
        .map(|raw| parse_rate_at_target(raw, config))
        .transpose()?;

    let utilization = get_utilization(supply, borrow);
    let result = borrow_rate(config, utilization, start_rate_at_target, args.elapsed);

    Ok(QuoteReport::new(utilization, start_rate_at_target, args.elapsed, &result))
}

pub fn run_quote(args: &QuoteArgs, format: OutputFormat, config: &CurveConfig) -> Result<()> {
    let report = build_quote(args, config)?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_quote_detail(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
    }

    Ok(())
}
