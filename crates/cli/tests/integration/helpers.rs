//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use std::path::PathBuf;

use assert_cmd::Command;

/// Create a CLI command with colors and ambient configuration disabled.
pub fn airm_cmd() -> Command {
    let mut cmd = Command::cargo_bin("airm").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("AIRM_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to a per-test config file and return its path.
pub fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("airm-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run a command and parse its stdout as JSON.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
