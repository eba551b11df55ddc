// crates/userpool-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures and assertions for validation tests.
// Purpose: Reduce duplication across integration tests for userpool-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use serde_json::Value;
use serde_json::json;
use userpool_config::ValidationError;
use userpool_config::ViolationKind;

/// Returns the smallest valid raw configuration.
pub fn minimal() -> Value {
    json!({ "user_pool_name": "test-pool" })
}

/// Returns `minimal()` with `key` set to `value`.
pub fn with(key: &str, value: Value) -> Value {
    let mut raw = minimal();
    if let Some(map) = raw.as_object_mut() {
        map.insert(key.to_string(), value);
    }
    raw
}

/// Asserts that `result` failed with `kind` at exactly `path`.
pub fn expect_violation<T>(
    result: Result<T, ValidationError>,
    path: &str,
    kind: ViolationKind,
) -> Result<(), String> {
    let error = match result {
        Ok(_) => return Err(format!("expected {kind} at {path}, but validation passed")),
        Err(error) => error,
    };
    match error.at(path) {
        Some(violation) if violation.kind == kind => Ok(()),
        Some(violation) => Err(format!("expected {kind} at {path}, got {}", violation.kind)),
        None => Err(format!("expected {kind} at {path}, got: {error}")),
    }
}

/// Asserts that `result` passed.
pub fn expect_valid<T>(result: Result<T, ValidationError>) -> Result<T, String> {
    result.map_err(|error| format!("expected valid config, got: {error}"))
}
