// crates/userpool-cli/tests/plan_commands.rs
// ============================================================================
// Module: Plan Command Tests
// Description: End-to-end tests for `userpool-plan plan`.
// Purpose: Ensure plan output, exit codes, and audit lines agree.
// Dependencies: userpool-cli binary, userpool-config, tempfile
// ============================================================================

//! ## Overview
//! Runs `plan` against temporary configs in both output formats and with
//! each audit destination.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use std::fs;

use serde_json::Value;
use userpool_config::config_toml_example;

use crate::common::run_cli;
use crate::common::stderr;
use crate::common::stdout;
use crate::common::write_config;

/// Config with two clients and nothing else.
const TWO_CLIENTS: &str = r#"user_pool_name = "pool"

[clients.c1]
name = "c1"

[clients.c2]
name = "c2"
"#;

// ============================================================================
// SECTION: Output
// ============================================================================

/// Tests JSON output lists one pool and two clients.
#[test]
fn plan_prints_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "userpool.toml", TWO_CLIENTS);
    let output = run_cli(&["plan", "--config", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["intent_count"], 3);
    assert_eq!(report["intents"][0]["kind"], "user_pool");
    assert_eq!(report["intents"][1]["kind"], "user_pool_client");
    assert_eq!(report["intents"][2]["attributes"]["name"], "c2");
}

/// Tests two runs over one file print byte-identical plans.
#[test]
fn plan_output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "userpool.toml", &config_toml_example());
    let first = run_cli(&["plan", "--config", path.to_str().unwrap()]);
    let second = run_cli(&["plan", "--config", path.to_str().unwrap()]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert_eq!(first.stdout, second.stdout);
}

/// Tests Markdown output renders a table.
#[test]
fn plan_prints_markdown_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "userpool.toml", TWO_CLIENTS);
    let output = run_cli(&["plan", "--config", path.to_str().unwrap(), "--format", "markdown"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("3 resource(s) planned."));
    assert!(text.contains("aws_cognito_user_pool_client.client[\"c1\"]"));
}

/// Tests a disabled pool plans nothing and still succeeds.
#[test]
fn disabled_pool_prints_empty_plan() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "userpool.toml",
        "user_pool_name = \"pool\"\nenabled = false\ndomain = \"auth\"\n",
    );
    let output = run_cli(&["plan", "--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["intent_count"], 0);
}

/// Tests an invalid config prints violations and no plan.
#[test]
fn invalid_config_prints_no_plan() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "userpool.toml", "user_pool_name = \"\"\n");
    let output = run_cli(&["plan", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("user_pool_name:"));
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Tests each run appends an audit line with its outcome.
#[test]
fn audit_log_records_each_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("audit.jsonl");
    let good = write_config(dir.path(), "good.toml", TWO_CLIENTS);
    let bad = write_config(dir.path(), "bad.toml", "user_pool_tier = \"GOLD\"\n");
    let missing = dir.path().join("missing.toml");
    let log_arg = log.to_str().unwrap();

    assert!(run_cli(&["plan", "--config", good.to_str().unwrap(), "--audit-log", log_arg])
        .status
        .success());
    assert!(!run_cli(&["plan", "--config", bad.to_str().unwrap(), "--audit-log", log_arg])
        .status
        .success());
    assert!(!run_cli(&["plan", "--config", missing.to_str().unwrap(), "--audit-log", log_arg])
        .status
        .success());

    let lines: Vec<Value> = fs::read_to_string(&log)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["outcome"], "composed");
    assert_eq!(lines[0]["intent_count"], 3);
    assert!(lines[0]["plan_digest"].as_str().unwrap().starts_with("sha256:"));
    assert_eq!(lines[1]["outcome"], "rejected");
    assert_eq!(lines[1]["violation_count"], 2);
    assert_eq!(lines[2]["outcome"], "load_failed");
}

/// Tests `--audit-log -` writes the audit line to stderr.
#[test]
fn audit_log_dash_writes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "userpool.toml", TWO_CLIENTS);
    let output = run_cli(&["plan", "--config", path.to_str().unwrap(), "--audit-log", "-"]);
    assert!(output.status.success());
    let line: Value = serde_json::from_str(stderr(&output).trim()).unwrap();
    assert_eq!(line["event"], "userpool_plan");
    assert_eq!(line["outcome"], "composed");
}
