//! Table formatting for simulation runs.

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::{format_percent, format_units};
use crate::report::SimulationStep;

#[derive(Tabled)]
struct SimulationRow {
    #[tabled(rename = "Step")]
    step: u32,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Supply")]
    supply: String,
    #[tabled(rename = "Borrow")]
    borrow: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Borrow APR")]
    borrow_apr: String,
    #[tabled(rename = "APR at Target")]
    rate_at_target_apr: String,
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    match (days, hours, minutes) {
        (0, 0, m) => format!("{}m", m),
        (0, h, m) => format!("{}h {}m", h, m),
        (d, h, _) => format!("{}d {}h", d, h),
    }
}

pub fn format_simulation_table(steps: &[SimulationStep], decimals: u8) -> String {
    if steps.is_empty() {
        return "No steps simulated.".to_string();
    }

    let rows: Vec<SimulationRow> = steps
        .iter()
        .map(|s| SimulationRow {
            step: s.step,
            time: format_duration(s.time),
            supply: format_units(s.total_supply_assets, decimals),
            borrow: format_units(s.total_borrow_assets, decimals),
            utilization: format_percent(s.utilization_ratio()),
            borrow_apr: format_percent(s.avg_apr),
            rate_at_target_apr: format_percent(s.rate_at_target_apr),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}
