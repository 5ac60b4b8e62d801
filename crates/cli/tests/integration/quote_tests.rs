//! Integration tests for the quote command.

use predicates::prelude::*;

use super::helpers::{airm_cmd, json_output, write_config};

#[test]
fn test_quote_table_output() {
    airm_cmd()
        .args(["quote", "--supply", "100", "--borrow", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Borrow Rate Quote"))
        .stdout(predicate::str::contains("90.00%"))
        .stdout(predicate::str::contains("uninitialized"))
        .stdout(predicate::str::contains("4.00%"));
}

#[test]
fn test_quote_json_output() {
    let json = json_output(airm_cmd().args([
        "quote", "--format", "json", "--supply", "1", "--borrow", "1",
    ]));

    // Full utilization on first touch is 4x the initial 4% APR
    let apr = json["avg_apr"].as_f64().unwrap();
    assert!((apr - 0.16).abs() < 1e-6, "unexpected APR {apr}");
    assert!(json["start_rate_at_target"].is_null());
    assert_eq!(json["elapsed"], 0);
}

#[test]
fn test_quote_with_stored_rate_after_five_days() {
    let json = json_output(airm_cmd().args([
        "--format",
        "json",
        "quote",
        "--supply",
        "1",
        "--borrow",
        "1",
        "--rate-at-target",
        "1268391679",
        "--elapsed",
        "432000",
    ]));

    let apr = json["avg_apr"].as_f64().unwrap();
    assert!(apr > 0.2068 && apr < 0.2528, "unexpected APR {apr}");
}

#[test]
fn test_quote_zero_supply() {
    let json = json_output(airm_cmd().args([
        "quote", "--format", "json", "--supply", "0", "--borrow", "0",
    ]));

    let apr = json["avg_apr"].as_f64().unwrap();
    assert!(apr > 0.0 && apr < 0.011);
}

#[test]
fn test_quote_with_config_file() {
    // 80% target utilization
    let path = write_config("quote-target", r#"{"target_utilization": "0xb1a2bc2ec500000"}"#);

    airm_cmd()
        .args(["--config"])
        .arg(&path)
        .args(["quote", "--supply", "100", "--borrow", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average APR:    4.00%"));
}

#[test]
fn test_quote_invalid_config_rejected() {
    let path = write_config("quote-invalid", r#"{"target_utilization": "0xde0b6b3a7640000"}"#);

    airm_cmd()
        .args(["--config"])
        .arg(&path)
        .args(["quote", "--supply", "100", "--borrow", "80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid curve config"));
}

#[test]
fn test_quote_missing_config_file() {
    airm_cmd()
        .args(["--config", "/nonexistent/airm.json", "quote", "--supply", "1", "--borrow", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_quote_verbose_logs_to_stderr() {
    let path = write_config("quote-verbose", "{}");

    airm_cmd()
        .args(["--verbose", "--config"])
        .arg(&path)
        .args(["quote", "--supply", "1", "--borrow", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded curve config"));
}
