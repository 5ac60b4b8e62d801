//! Integration tests for the market-id command.

use predicates::prelude::*;

use super::helpers::{airm_cmd, json_output};

const LOAN: &str = "0x0000000000000000000000000000000000000001";
const COLLATERAL: &str = "0x0000000000000000000000000000000000000002";
const ORACLE: &str = "0x0000000000000000000000000000000000000003";
const IRM: &str = "0x0000000000000000000000000000000000000004";

fn market_id_args(ltv: &str) -> Vec<String> {
    [
        "market-id",
        "--loan-token",
        LOAN,
        "--collateral-token",
        COLLATERAL,
        "--oracle",
        ORACLE,
        "--irm",
        IRM,
        "--ltv",
        ltv,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_market_id_json_is_deterministic() {
    let first = json_output(airm_cmd().args(["--format", "json"]).args(market_id_args("0.86")));
    let second = json_output(airm_cmd().args(["--format", "json"]).args(market_id_args("0.86")));

    let id = first["market_id"].as_str().unwrap();
    assert!(id.starts_with("0x"));
    assert_eq!(id.len(), 66);
    assert_eq!(first["market_id"], second["market_id"]);
}

#[test]
fn test_market_id_depends_on_ltv() {
    let a = json_output(airm_cmd().args(["--format", "json"]).args(market_id_args("0.86")));
    let b = json_output(airm_cmd().args(["--format", "json"]).args(market_id_args("0.915")));

    assert_ne!(a["market_id"], b["market_id"]);
}

#[test]
fn test_market_id_table_output() {
    airm_cmd()
        .args(market_id_args("0.86"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Market ID: 0x"))
        .stdout(predicate::str::contains("860000000000000000"));
}

#[test]
fn test_market_id_invalid_address() {
    let mut args = market_id_args("0.86");
    args[6] = "0xnot-an-oracle".to_string();

    airm_cmd()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid oracle address"));
}

#[test]
fn test_market_id_rejects_ltv_out_of_range() {
    for ltv in ["0", "5"] {
        airm_cmd()
            .args(market_id_args(ltv))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid LTV"));
    }
}
