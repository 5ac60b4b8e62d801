//! Detailed output formatting for single results.

use std::fmt::Write;

use adaptive_irm::math::rate_to_apr;
use adaptive_irm::{MarketId, MarketParams};
use colored::Colorize;

use super::format_percent;
use crate::report::QuoteReport;

fn header(output: &mut String, title: &str) {
    let _ = writeln!(output, "{}", "=".repeat(60));
    let _ = writeln!(output, "{}", title.bold());
    let _ = writeln!(output, "{}\n", "=".repeat(60));
}

pub fn format_quote_detail(report: &QuoteReport) -> String {
    let mut output = String::new();

    header(&mut output, "Borrow Rate Quote");

    // Inputs
    let _ = writeln!(output, "{}", "Market".cyan().bold());
    let _ = writeln!(output, "  Utilization:    {}", format_percent(report.utilization_ratio()));
    let _ = writeln!(output, "  Elapsed:        {} seconds", report.elapsed);
    match report.start_rate_at_target {
        Some(rate) => {
            let _ = writeln!(
                output,
                "  Rate at Target: {} ({} APR)\n",
                rate,
                format_percent(rate_to_apr(rate))
            );
        }
        None => {
            let _ = writeln!(output, "  Rate at Target: {}\n", "uninitialized".yellow());
        }
    }

    // Rates
    let _ = writeln!(output, "{}", "Rates".cyan().bold());
    let _ = writeln!(
        output,
        "  Average Rate:   {} per second",
        report.avg_borrow_rate
    );
    let _ = writeln!(output, "  Average APR:    {}", format_percent(report.avg_apr).green());
    let _ = writeln!(output, "  Average APY:    {}", format_percent(report.avg_apy));
    let _ = writeln!(output, "  End APR:        {}\n", format_percent(report.end_apr));

    // Adaptation
    let _ = writeln!(output, "{}", "Adaptation".cyan().bold());
    let _ = writeln!(
        output,
        "  New Rate at Target: {} ({} APR)",
        report.end_rate_at_target,
        format_percent(rate_to_apr(report.end_rate_at_target))
    );

    output
}

pub fn format_market_id_detail(params: &MarketParams, id: &MarketId) -> String {
    let mut output = String::new();

    header(&mut output, "Market");

    let _ = writeln!(output, "{}", "Parameters".cyan().bold());
    let _ = writeln!(output, "  Loan Token:       {}", params.loan_token);
    let _ = writeln!(output, "  Collateral Token: {}", params.collateral_token);
    let _ = writeln!(output, "  Oracle:           {}", params.oracle);
    let _ = writeln!(output, "  IRM:              {}", params.irm);
    let _ = writeln!(output, "  LTV:              {}\n", params.ltv);

    let _ = writeln!(output, "{}", "Identifier".cyan().bold());
    let _ = writeln!(output, "  Market ID: {}", id.to_string().green());

    output
}
