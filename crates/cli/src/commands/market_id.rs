//! Market id command implementation.

use adaptive_irm::{compute_market_id, MarketParams, WAD};
use anyhow::Result;
use serde_json::json;

use super::{parse_address, parse_amount};
use crate::cli::{MarketIdArgs, OutputFormat};
use crate::output::format_market_id_detail;

pub fn build_market_params(args: &MarketIdArgs) -> Result<MarketParams> {
    let ltv = parse_amount(&args.ltv, 18)?;
    if ltv.is_zero() || ltv > WAD {
        anyhow::bail!("Invalid LTV {}: must be greater than 0 and at most 1", args.ltv);
    }

    Ok(MarketParams {
        loan_token: parse_address(&args.loan_token, "loan token")?,
        collateral_token: parse_address(&args.collateral_token, "collateral token")?,
        oracle: parse_address(&args.oracle, "oracle")?,
        irm: parse_address(&args.irm, "irm")?,
        ltv,
    })
}

pub fn run_market_id(args: &MarketIdArgs, format: OutputFormat) -> Result<()> {
    let params = build_market_params(args)?;
    let id = compute_market_id(&params);

    match format {
        OutputFormat::Table => {
            println!("{}", format_market_id_detail(&params, &id));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&json!({
                "market_id": id,
                "params": params,
            }))?;
            println!("{}", json);
        }
    }

    Ok(())
}
