//! Integration tests for the simulate command.

use predicates::prelude::*;

use super::helpers::{airm_cmd, json_output};

#[test]
fn test_simulate_table_output() {
    airm_cmd()
        .args(["simulate", "--supply", "1000", "--borrow", "950", "--steps", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step"))
        .stdout(predicate::str::contains("Borrow APR"))
        .stdout(predicate::str::contains("3d 0h"));
}

#[test]
fn test_simulate_json_rates_rise_above_target() {
    let json = json_output(airm_cmd().args([
        "simulate", "--format", "json", "--supply", "1000", "--borrow", "990", "--steps", "5",
    ]));

    let steps = json.as_array().unwrap();
    assert_eq!(steps.len(), 5);

    let aprs: Vec<f64> = steps.iter().map(|s| s["avg_apr"].as_f64().unwrap()).collect();
    for pair in aprs.windows(2) {
        assert!(pair[1] > pair[0], "APR should rise: {aprs:?}");
    }
}

#[test]
fn test_simulate_json_rates_fall_below_target() {
    let json = json_output(airm_cmd().args([
        "simulate",
        "--format",
        "json",
        "--supply",
        "1000",
        "--borrow",
        "100",
        "--steps",
        "4",
        "--interval",
        "3600",
        "--no-accrue",
    ]));

    let steps = json.as_array().unwrap();
    let first = steps[0]["rate_at_target_apr"].as_f64().unwrap();
    let last = steps[3]["rate_at_target_apr"].as_f64().unwrap();
    assert!(last < first);
    assert_eq!(steps[3]["time"], 4 * 3600);
}

#[test]
fn test_simulate_zero_steps() {
    airm_cmd()
        .args(["simulate", "--supply", "1", "--borrow", "1", "--steps", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No steps simulated."));
}
