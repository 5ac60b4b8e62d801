//! Command implementations.

pub mod market_id;
pub mod quote;
pub mod simulate;

use std::path::Path;

use adaptive_irm::CurveConfig;
use alloy_primitives::{Address, U256};
use anyhow::{Context, Result};

pub use market_id::run_market_id;
pub use quote::run_quote;
pub use simulate::run_simulate;

/// Load the curve configuration, falling back to the protocol constants.
pub fn load_config(path: Option<&Path>) -> Result<CurveConfig> {
    let Some(path) = path else {
        return Ok(CurveConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: CurveConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().context("Invalid curve config")?;

    tracing::debug!(?config, path = %path.display(), "loaded curve config");
    Ok(config)
}

/// Parse a human-readable amount string to U256 given decimals.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256> {
    let parts: Vec<&str> = amount.split('.').collect();

    let (integer_part, fractional_part) = match parts.as_slice() {
        [integer] => (*integer, ""),
        [integer, fraction] => (*integer, *fraction),
        _ => anyhow::bail!("Invalid amount format: {}", amount),
    };

    // Truncate the fractional part to the token's precision, then pad
    let fractional = fractional_part
        .get(..usize::from(decimals))
        .unwrap_or(fractional_part);
    let fractional = format!("{:0<width$}", fractional, width = usize::from(decimals));

    let combined = format!("{}{}", integer_part, fractional);
    let combined = combined.trim_start_matches('0');

    if combined.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(combined, 10).with_context(|| format!("Failed to parse amount: {}", amount))
}

/// Parse a human-readable amount into smallest units that fit a market total.
pub fn parse_units(amount: &str, decimals: u8) -> Result<u128> {
    let value = parse_amount(amount, decimals)?;
    u128::try_from(value).map_err(|_| anyhow::anyhow!("Amount too large: {}", amount))
}

pub fn parse_address(value: &str, what: &str) -> Result<Address> {
    value
        .parse()
        .with_context(|| format!("Invalid {} address: {}", what, value))
}
