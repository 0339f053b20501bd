//! Basic CLI E2E tests.
//!
//! Tests run the built `monthly` binary against a temporary config file and
//! verify its outputs.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Run a CLI command with `--config <config>` and return output.
fn run_cli(config: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_monthly"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../monthly-core/tests/fixtures/datebook.json")
}

fn temp_config() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    (dir, path)
}

#[test]
fn test_show_json() {
    let (_dir, config) = temp_config();
    let datebook = fixture();
    let (code, stdout, stderr) = run_cli(
        &config,
        &[
            "show",
            "--json",
            "--date",
            "2021-01-15",
            "--weekend",
            "0000001",
            "--datebook",
            datebook.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0, "show failed: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed["nonworkdays"],
        serde_json::json!([3, 4, 8, 10, 15, 17, 24, 25, 31])
    );
    assert_eq!(parsed["days"][14]["classification"], "current");
    assert_eq!(parsed["frameTriple"], serde_json::json!([1, 15, 31]));
}

#[test]
fn test_show_table() {
    let (_dir, config) = temp_config();
    let (code, stdout, _) = run_cli(&config, &["show", "--date", "2021-02-10"]);
    assert_eq!(code, 0, "show table failed");
    assert!(stdout.starts_with("February 2021 (weekend: Saturday, Sunday)"));
    assert!(stdout.contains("Current"));
    assert_eq!(stdout.lines().filter(|l| l.contains("Remaining")).count(), 18);
}

#[test]
fn test_summary() {
    let (_dir, config) = temp_config();
    let (code, stdout, _) = run_cli(&config, &["summary", "--date", "2021-02-10"]);
    assert_eq!(code, 0, "summary failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["days"]["total"], 28);
    assert_eq!(parsed["days"]["percentage"], 0.36);
    assert_eq!(parsed["dates"]["end"], "2021-02-28");
}

#[test]
fn test_planner() {
    let (_dir, config) = temp_config();
    let datebook = fixture();
    let (code, stdout, _) = run_cli(
        &config,
        &["planner", "--date", "2021-03-15", "--datebook", datebook.to_str().unwrap()],
    );
    assert_eq!(code, 0, "planner failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["meetings"].as_array().unwrap().len(), 4);
}

#[test]
fn test_invalid_weekend_fails() {
    let (_dir, config) = temp_config();
    let (code, _, stderr) = run_cli(&config, &["show", "--weekend", "20"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("weekend option"), "stderr: {stderr}");
}

#[test]
fn test_padded_weekend_is_not_a_code() {
    let (_dir, config) = temp_config();
    let (code, _, stderr) = run_cli(&config, &["summary", "--weekend", "0001"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("\"0001\""), "stderr: {stderr}");

    let (code, _, _) = run_cli(&config, &["config", "set", "weekend", "007"]);
    assert_eq!(code, 1);
}

#[test]
fn test_invalid_datebook_fails() {
    let (dir, config) = temp_config();
    let datebook = dir.path().join("bad.json");
    std::fs::write(&datebook, r#"[{"date": "2021-01-04", "title": "No type"}]"#).unwrap();

    let (code, _, stderr) = run_cli(
        &config,
        &["show", "--datebook", datebook.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("datebook item 0"), "stderr: {stderr}");
}

#[test]
fn test_config_set_get() {
    let (_dir, config) = temp_config();
    let (code, stdout, _) = run_cli(&config, &["config", "set", "weekend", "0000001"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (code, stdout, _) = run_cli(&config, &["config", "get", "weekend"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0000001");

    let (code, stdout, _) = run_cli(&config, &["summary", "--date", "2021-01-15"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["workdays"]["total"], 26);
}

#[test]
fn test_config_rejects_bad_values() {
    let (_dir, config) = temp_config();
    let (code, _, _) = run_cli(&config, &["config", "set", "weekend", "15"]);
    assert_eq!(code, 1);
    let (code, _, _) = run_cli(&config, &["config", "get", "theme"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_reset() {
    let (_dir, config) = temp_config();
    run_cli(&config, &["config", "set", "locale", "es"]);
    let (code, _, _) = run_cli(&config, &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&config, &["config", "get", "locale"]);
    assert_eq!(stdout.trim(), "en");
}
