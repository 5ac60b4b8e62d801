//! Simulate command implementation.
//!
//! Drives the adaptive model the way a lending market would: bootstrap the
//! market, then at every interval update the rate and accrue interest into
//! the totals.

use adaptive_irm::math::{rate_to_apr, w_mul_down, w_taylor_compounded};
use adaptive_irm::{
    AdaptiveCurveIrm, Clock, CurveConfig, InMemoryRateStore, ManualClock, MarketParams,
    MarketState, TracingSink,
};
use alloy_primitives::{Address, U256};
use anyhow::Result;

use super::parse_units;
use crate::cli::{OutputFormat, SimulateArgs};
use crate::output::format_simulation_table;
use crate::report::SimulationStep;

/// Controller used for the simulated market.
const SIMULATION_CONTROLLER: Address = Address::repeat_byte(0x01);

fn simulation_market() -> MarketParams {
    MarketParams {
        loan_token: Address::repeat_byte(0x10),
        collateral_token: Address::repeat_byte(0x20),
        oracle: Address::repeat_byte(0x30),
        irm: Address::repeat_byte(0x40),
        ltv: U256::from(860_000_000_000_000_000u64),
    }
}

/// Interest accrued on `borrow` at `rate` over `elapsed` seconds.
fn accrued_interest(borrow: u128, rate: U256, elapsed: u64) -> u128 {
    let growth = w_taylor_compounded(rate, U256::from(elapsed));
    w_mul_down(U256::from(borrow), growth).saturating_to::<u128>()
}

pub fn build_simulation(args: &SimulateArgs, config: &CurveConfig) -> Result<Vec<SimulationStep>> {
    let supply = parse_units(&args.supply, args.decimals)?;
    let borrow = parse_units(&args.borrow, args.decimals)?;

    let mut irm = AdaptiveCurveIrm::with_parts(
        SIMULATION_CONTROLLER,
        *config,
        InMemoryRateStore::new(),
        ManualClock::new(0),
        TracingSink,
    )?;
    let params = simulation_market();
    let mut state = MarketState::with_totals(supply, borrow, 0);

    irm.init_interest(&params, &state);

    let mut steps = Vec::new();
    for step in 1..=args.steps {
        irm.clock_mut().advance(args.interval);
        let now = irm.clock().now();

        let rate = irm.update(SIMULATION_CONTROLLER, &params, &state)?;
        let rate_at_target = irm
            .rate_at_target(&params)
            .unwrap_or(config.initial_rate_at_target);

        let elapsed = now - state.last_update;
        if !args.no_accrue {
            let interest = accrued_interest(state.total_borrow_assets, rate, elapsed);
            state.total_borrow_assets = state.total_borrow_assets.saturating_add(interest);
            state.total_supply_assets = state.total_supply_assets.saturating_add(interest);
        }
        state.last_update = now;

        steps.push(SimulationStep {
            step,
            time: now,
            total_supply_assets: state.total_supply_assets,
            total_borrow_assets: state.total_borrow_assets,
            utilization: state.utilization(),
            avg_borrow_rate: rate,
            rate_at_target,
            avg_apr: rate_to_apr(rate),
            rate_at_target_apr: rate_to_apr(rate_at_target),
        });
    }

    Ok(steps)
}

pub fn run_simulate(args: &SimulateArgs, format: OutputFormat, config: &CurveConfig) -> Result<()> {
    let steps = build_simulation(args, config)?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_simulation_table(&steps, args.decimals));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&steps)?;
            println!("{}", json);
        }
    }

    Ok(())
}
