// crates/userpool-cli/tests/common/mod.rs
// ============================================================================
// Module: CLI Test Helpers
// Description: Binary invocation and fixture helpers for CLI tests.
// ============================================================================

//! Shared helpers for `userpool-plan` binary tests.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

/// Runs the binary with a clean locale and config environment.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_userpool-plan"))
        .args(args)
        .env_remove("USERPOOL_PLAN_LANG")
        .env_remove("USERPOOL_PLAN_CONFIG")
        .output()
        .expect("run userpool-plan")
}

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write config");
    path
}

/// Stdout as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
