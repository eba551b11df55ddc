//! Primitive validation tests for userpool-config.
// crates/userpool-config/tests/primitive_validation.rs
// =============================================================================
// Module: Primitive Validation Tests
// Description: Vocabulary and bound checks for scalar settings.
// Purpose: Ensure exact, case-sensitive matching and inclusive bounds.
// =============================================================================

use serde_json::json;
use userpool_config::ViolationKind;
use userpool_config::primitive::check_additional_flows;
use userpool_config::primitive::check_grace_period;
use userpool_config::primitive::check_mfa_configuration;
use userpool_config::primitive::check_password_length;
use userpool_config::validate;
use userpool_core::AdditionalFlowsMode;
use userpool_core::Tier;

mod common;

use common::expect_valid;
use common::expect_violation;
use common::with;

type TestResult = Result<(), String>;

// ============================================================================
// SECTION: Tier
// ============================================================================

#[test]
fn every_tier_token_is_accepted() -> TestResult {
    for (token, tier) in [("LITE", Tier::Lite), ("ESSENTIALS", Tier::Essentials), ("PLUS", Tier::Plus)]
    {
        let config = expect_valid(validate(&with("user_pool_tier", json!(token))))?;
        if config.tier != tier {
            return Err(format!("{token} resolved to {}", config.tier));
        }
    }
    Ok(())
}

#[test]
fn tier_variants_and_empty_string_are_rejected() -> TestResult {
    for token in ["lite", "Essentials", "plus", "", "PREMIUM", " LITE"] {
        expect_violation(
            validate(&with("user_pool_tier", json!(token))),
            "user_pool_tier",
            ViolationKind::DomainConstraint,
        )?;
    }
    Ok(())
}

// ============================================================================
// SECTION: MFA
// ============================================================================

#[test]
fn mfa_modes_match_exactly() -> TestResult {
    for token in ["OFF", "OPTIONAL", "ON"] {
        check_mfa_configuration(token)?;
    }
    for token in ["off", "optional", "On", "REQUIRED", ""] {
        if check_mfa_configuration(token).is_ok() {
            return Err(format!("{token:?} must be rejected"));
        }
    }
    expect_violation(
        validate(&with("mfa_configuration", json!("optional"))),
        "mfa_configuration",
        ViolationKind::DomainConstraint,
    )
}

// ============================================================================
// SECTION: Advanced Security Additional Flows
// ============================================================================

#[test]
fn additional_flows_absent_is_valid() -> TestResult {
    let config = expect_valid(validate(&common::minimal()))?;
    if config.advanced_security_additional_flows.is_some() {
        return Err("absent additional flows must stay unset".to_string());
    }
    Ok(())
}

#[test]
fn additional_flows_accepts_audit_and_enforced() -> TestResult {
    for (token, mode) in [("AUDIT", AdditionalFlowsMode::Audit), ("ENFORCED", AdditionalFlowsMode::Enforced)] {
        let config =
            expect_valid(validate(&with("advanced_security_additional_flows", json!(token))))?;
        if config.advanced_security_additional_flows != Some(mode) {
            return Err(format!("{token} resolved incorrectly"));
        }
    }
    Ok(())
}

#[test]
fn additional_flows_rejects_empty_lowercase_and_unknown() -> TestResult {
    for token in ["", "audit", "enforced", "OFF", "INVALID"] {
        expect_violation(
            validate(&with("advanced_security_additional_flows", json!(token))),
            "advanced_security_additional_flows",
            ViolationKind::DomainConstraint,
        )?;
        if check_additional_flows(token).is_ok() {
            return Err(format!("{token:?} must be rejected"));
        }
    }
    Ok(())
}

#[test]
fn additional_flows_rejects_sequence_value() -> TestResult {
    expect_violation(
        validate(&with("advanced_security_additional_flows", json!(["AUDIT"]))),
        "advanced_security_additional_flows",
        ViolationKind::TypeMismatch,
    )
}

// ============================================================================
// SECTION: Numeric Bounds
// ============================================================================

#[test]
fn password_length_bounds_are_inclusive() -> TestResult {
    if check_password_length(6)? != 6 || check_password_length(99)? != 99 {
        return Err("bounds must be accepted".to_string());
    }
    for length in [5, 100, 0, -1] {
        if check_password_length(length).is_ok() {
            return Err(format!("{length} must be rejected"));
        }
    }
    Ok(())
}

#[test]
fn grace_period_bounds_are_inclusive() -> TestResult {
    if check_grace_period(0)? != 0 || check_grace_period(86_400)? != 86_400 {
        return Err("bounds must be accepted".to_string());
    }
    for seconds in [-1, 86_401] {
        if check_grace_period(seconds).is_ok() {
            return Err(format!("{seconds} must be rejected"));
        }
    }
    Ok(())
}
