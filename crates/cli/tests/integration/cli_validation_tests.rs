//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages.

use predicates::prelude::*;

use super::helpers::airm_cmd;

#[test]
fn test_help_output() {
    airm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("airm"))
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("market-id"));
}

#[test]
fn test_quote_help_output() {
    airm_cmd()
        .args(["quote", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--supply"))
        .stdout(predicate::str::contains("--borrow"))
        .stdout(predicate::str::contains("--rate-at-target"));
}

#[test]
fn test_simulate_help_output() {
    airm_cmd()
        .args(["simulate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--steps"))
        .stdout(predicate::str::contains("--interval"));
}

#[test]
fn test_invalid_command() {
    airm_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_quote_missing_borrow() {
    airm_cmd()
        .args(["quote", "--supply", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_market_id_missing_ltv() {
    airm_cmd()
        .args([
            "market-id",
            "--loan-token",
            "0x0000000000000000000000000000000000000001",
            "--collateral-token",
            "0x0000000000000000000000000000000000000002",
            "--oracle",
            "0x0000000000000000000000000000000000000003",
            "--irm",
            "0x0000000000000000000000000000000000000004",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_output_format() {
    airm_cmd()
        .args(["quote", "--supply", "1", "--borrow", "1", "--format", "invalid_format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_amount() {
    airm_cmd()
        .args(["quote", "--supply", "1.2.3", "--borrow", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount format"));
}

#[test]
fn test_invalid_rate_at_target() {
    airm_cmd()
        .args(["quote", "--supply", "1", "--borrow", "1", "--rate-at-target", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rate at target"));
}

#[test]
fn test_rate_at_target_outside_bounds() {
    airm_cmd()
        .args(["quote", "--supply", "1", "--borrow", "1", "--rate-at-target", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside"))
        .stderr(predicate::str::contains("63419583967"));
}

#[test]
fn test_simulate_too_many_steps() {
    airm_cmd()
        .args(["simulate", "--supply", "100", "--borrow", "90", "--steps", "10000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("10000000"));
}
