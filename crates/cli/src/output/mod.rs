//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::{format_market_id_detail, format_quote_detail};
pub use table::format_simulation_table;

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Smallest units to a human-readable amount with at most 4 decimals shown.
fn format_units(amount: u128, decimals: u8) -> String {
    let scale = 10u128.checked_pow(u32::from(decimals)).unwrap_or(u128::MAX);
    let whole = amount / scale;
    let fraction = amount % scale;

    if decimals == 0 {
        return whole.to_string();
    }

    let fraction = format!("{:0>width$}", fraction, width = usize::from(decimals));
    let shown = fraction.get(..4).unwrap_or(&fraction);
    format!("{}.{}", whole, shown)
}
