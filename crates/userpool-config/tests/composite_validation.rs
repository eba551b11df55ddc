//! Composite validation tests for userpool-config.
// crates/userpool-config/tests/composite_validation.rs
// =============================================================================
// Module: Composite Validation Tests
// Description: Block-level and cross-field rules.
// Purpose: Ensure structured blocks enforce their invariants and report paths.
// =============================================================================

use serde_json::Value;
use serde_json::json;
use userpool_config::ViolationKind;
use userpool_config::validate;
use userpool_core::ClientKey;
use userpool_core::RefreshTokenRotation;

mod common;

use common::expect_valid;
use common::expect_violation;
use common::with;

type TestResult = Result<(), String>;

fn with_client(client: Value) -> Value {
    with("clients", json!({ "web": client }))
}

// ============================================================================
// SECTION: Password Policy
// ============================================================================

#[test]
fn password_policy_accepts_every_flag_combination() -> TestResult {
    for mask in 0_u8 .. 16 {
        let raw = with(
            "password_policy",
            json!({
                "minimum_length": 8,
                "require_lowercase": mask & 1 != 0,
                "require_numbers": mask & 2 != 0,
                "require_symbols": mask & 4 != 0,
                "require_uppercase": mask & 8 != 0
            }),
        );
        expect_valid(validate(&raw))?;
    }
    Ok(())
}

#[test]
fn password_policy_rejects_out_of_range_length() -> TestResult {
    for length in [5, 100] {
        let raw = with("password_policy", json!({ "minimum_length": length }));
        expect_violation(
            validate(&raw),
            "password_policy.minimum_length",
            ViolationKind::DomainConstraint,
        )?;
    }
    Ok(())
}

#[test]
fn password_policy_requires_minimum_length() -> TestResult {
    let raw = with("password_policy", json!({ "require_numbers": true }));
    expect_violation(
        validate(&raw),
        "password_policy.minimum_length",
        ViolationKind::MissingRequiredField,
    )
}

#[test]
fn temporary_password_validity_is_bounded() -> TestResult {
    let raw = with(
        "password_policy",
        json!({ "minimum_length": 8, "temporary_password_validity_days": 366 }),
    );
    expect_violation(
        validate(&raw),
        "password_policy.temporary_password_validity_days",
        ViolationKind::DomainConstraint,
    )
}

// ============================================================================
// SECTION: Refresh Token Rotation
// ============================================================================

#[test]
fn rotate_accepts_upper_bound() -> TestResult {
    let raw = with(
        "refresh_token_rotation",
        json!({ "type": "rotate", "retry_grace_period_seconds": 86_400 }),
    );
    let config = expect_valid(validate(&raw))?;
    if config.refresh_token_rotation != Some(RefreshTokenRotation::rotate(86_400)) {
        return Err(format!("unexpected rotation: {:?}", config.refresh_token_rotation));
    }
    Ok(())
}

#[test]
fn rotate_rejects_out_of_range_grace_period() -> TestResult {
    for seconds in [86_401, -1] {
        let raw = with(
            "refresh_token_rotation",
            json!({ "type": "rotate", "retry_grace_period_seconds": seconds }),
        );
        expect_violation(
            validate(&raw),
            "refresh_token_rotation.retry_grace_period_seconds",
            ViolationKind::DomainConstraint,
        )?;
    }
    Ok(())
}

#[test]
fn disabled_ignores_grace_period() -> TestResult {
    for seconds in [0, -1, 86_401, 1_000_000] {
        let raw = with(
            "refresh_token_rotation",
            json!({ "type": "disabled", "retry_grace_period_seconds": seconds }),
        );
        let config = expect_valid(validate(&raw))?;
        if config.refresh_token_rotation != Some(RefreshTokenRotation::disabled()) {
            return Err(format!("grace period {seconds} leaked into disabled rotation"));
        }
    }
    Ok(())
}

#[test]
fn disabled_ignores_grace_period_type() -> TestResult {
    for grace in [json!("300"), json!([1, 2]), json!(true)] {
        let raw = with(
            "refresh_token_rotation",
            json!({ "type": "disabled", "retry_grace_period_seconds": grace }),
        );
        let config = expect_valid(validate(&raw))?;
        if config.refresh_token_rotation != Some(RefreshTokenRotation::disabled()) {
            return Err(format!("grace period {grace} leaked into disabled rotation"));
        }
    }
    Ok(())
}

#[test]
fn rotate_requires_integer_grace_period() -> TestResult {
    let raw = with(
        "refresh_token_rotation",
        json!({ "type": "rotate", "retry_grace_period_seconds": "300" }),
    );
    expect_violation(
        validate(&raw),
        "refresh_token_rotation.retry_grace_period_seconds",
        ViolationKind::TypeMismatch,
    )
}

#[test]
fn unknown_rotation_type_fails_regardless_of_grace_period() -> TestResult {
    let raw = with(
        "refresh_token_rotation",
        json!({ "type": "ROTATE", "retry_grace_period_seconds": 10 }),
    );
    let result = validate(&raw);
    expect_violation(result.clone(), "refresh_token_rotation.type", ViolationKind::DomainConstraint)?;
    match result {
        Err(error) if error.violations().len() == 1 => Ok(()),
        other => Err(format!("expected exactly one violation, got {other:?}")),
    }
}

#[test]
fn rotate_defaults_grace_period_to_zero() -> TestResult {
    let config = expect_valid(validate(&with("refresh_token_rotation", json!({ "type": "rotate" }))))?;
    if config.refresh_token_rotation != Some(RefreshTokenRotation::rotate(0)) {
        return Err("expected zero grace period".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Clients
// ============================================================================

#[test]
fn client_requires_non_empty_name() -> TestResult {
    expect_violation(
        validate(&with_client(json!({}))),
        "clients.web.name",
        ViolationKind::MissingRequiredField,
    )?;
    expect_violation(
        validate(&with_client(json!({ "name": "" }))),
        "clients.web.name",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn client_token_validity_must_be_positive() -> TestResult {
    for (field, value) in
        [("access_token_validity", 0), ("id_token_validity", -3), ("refresh_token_validity", 0)]
    {
        let raw = with_client(json!({ "name": "web", field: value }));
        expect_violation(
            validate(&raw),
            &format!("clients.web.{field}"),
            ViolationKind::DomainConstraint,
        )?;
    }
    Ok(())
}

#[test]
fn client_auth_flows_come_from_vocabulary() -> TestResult {
    let raw = with_client(json!({
        "name": "web",
        "explicit_auth_flows": ["ALLOW_USER_SRP_AUTH", "ALLOW_MAGIC"]
    }));
    expect_violation(
        validate(&raw),
        "clients.web.explicit_auth_flows[1]",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn mixed_type_lists_report_source_indices() -> TestResult {
    let raw = with_client(json!({
        "name": "web",
        "explicit_auth_flows": ["ALLOW_USER_SRP_AUTH", 7, "ALLOW_MAGIC"]
    }));
    let result = validate(&raw);
    expect_violation(
        validate(&raw),
        "clients.web.explicit_auth_flows[1]",
        ViolationKind::TypeMismatch,
    )?;
    match result {
        Err(error) if error.has_path("clients.web.explicit_auth_flows[2]") => {
            Err("mistyped list must not be checked against the vocabulary".to_string())
        }
        Err(_) => Ok(()),
        Ok(_) => Err("expected a type mismatch".to_string()),
    }
}

#[test]
fn oauth_flows_require_callback_urls() -> TestResult {
    let raw = with_client(json!({ "name": "web", "allowed_oauth_flows": ["code"] }));
    expect_violation(validate(&raw), "clients.web.callback_urls", ViolationKind::DomainConstraint)
}

#[test]
fn callback_urls_must_be_https_or_localhost() -> TestResult {
    let raw = with_client(json!({
        "name": "web",
        "allowed_oauth_flows": ["code"],
        "callback_urls": ["https://app.example.com/cb", "http://app.example.com/cb"]
    }));
    expect_violation(validate(&raw), "clients.web.callback_urls[1]", ViolationKind::DomainConstraint)
}

#[test]
fn localhost_urls_reject_whitespace() -> TestResult {
    let raw = with_client(json!({
        "name": "web",
        "allowed_oauth_flows": ["code"],
        "callback_urls": ["http://localhost:3000/cb"],
        "logout_urls": ["http://localhost/a b"]
    }));
    expect_violation(validate(&raw), "clients.web.logout_urls[0]", ViolationKind::DomainConstraint)
}

#[test]
fn custom_scopes_need_resource_server_prefix() -> TestResult {
    let raw = with_client(json!({ "name": "web", "allowed_oauth_scopes": ["openid", "read"] }));
    expect_violation(
        validate(&raw),
        "clients.web.allowed_oauth_scopes[1]",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn client_rotation_is_validated_under_client_path() -> TestResult {
    let raw = with_client(json!({
        "name": "web",
        "refresh_token_rotation": { "type": "rotate", "retry_grace_period_seconds": 90_000 }
    }));
    expect_violation(
        validate(&raw),
        "clients.web.refresh_token_rotation.retry_grace_period_seconds",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn valid_client_keeps_defaults() -> TestResult {
    let config = expect_valid(validate(&with_client(json!({ "name": "web-app" }))))?;
    let client = config
        .clients
        .get(&ClientKey::new("web"))
        .ok_or_else(|| "client web missing".to_string())?;
    if client.name != "web-app" || !client.enable_token_revocation || client.generate_secret {
        return Err(format!("unexpected client defaults: {client:?}"));
    }
    Ok(())
}

// ============================================================================
// SECTION: Groups
// ============================================================================

#[test]
fn duplicate_group_names_are_rejected() -> TestResult {
    let raw = with("user_groups", json!([{ "name": "admins" }, { "name": "admins" }]));
    expect_violation(validate(&raw), "user_groups[1].name", ViolationKind::DomainConstraint)
}

#[test]
fn duplicate_precedences_are_valid() -> TestResult {
    let raw = with(
        "user_groups",
        json!([{ "name": "a", "precedence": 1 }, { "name": "b", "precedence": 1 }]),
    );
    let config = expect_valid(validate(&raw))?;
    if config.user_groups.len() != 2 {
        return Err("expected both groups".to_string());
    }
    Ok(())
}

#[test]
fn negative_precedence_is_rejected() -> TestResult {
    let raw = with("user_groups", json!([{ "name": "a", "precedence": -1 }]));
    expect_violation(validate(&raw), "user_groups[0].precedence", ViolationKind::DomainConstraint)
}

// ============================================================================
// SECTION: Account Recovery
// ============================================================================

#[test]
fn recovery_accepts_two_prioritized_mechanisms() -> TestResult {
    let raw = with(
        "account_recovery_setting",
        json!({ "recovery_mechanisms": [
            { "name": "verified_email", "priority": 1 },
            { "name": "verified_phone_number", "priority": 2 }
        ] }),
    );
    expect_valid(validate(&raw)).map(|_| ())
}

#[test]
fn recovery_rejects_duplicate_priorities() -> TestResult {
    let raw = with(
        "account_recovery_setting",
        json!({ "recovery_mechanisms": [
            { "name": "verified_email", "priority": 1 },
            { "name": "verified_phone_number", "priority": 1 }
        ] }),
    );
    expect_violation(
        validate(&raw),
        "account_recovery_setting.recovery_mechanisms[1].priority",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn recovery_rejects_admin_only_combination() -> TestResult {
    let raw = with(
        "account_recovery_setting",
        json!({ "recovery_mechanisms": [
            { "name": "admin_only", "priority": 1 },
            { "name": "verified_email", "priority": 2 }
        ] }),
    );
    expect_violation(
        validate(&raw),
        "account_recovery_setting.recovery_mechanisms",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn recovery_requires_one_or_two_mechanisms() -> TestResult {
    let raw = with("account_recovery_setting", json!({ "recovery_mechanisms": [] }));
    expect_violation(
        validate(&raw),
        "account_recovery_setting.recovery_mechanisms",
        ViolationKind::DomainConstraint,
    )
}

// ============================================================================
// SECTION: Add-ons and Tags
// ============================================================================

#[test]
fn add_ons_mode_comes_from_vocabulary() -> TestResult {
    let raw = with("user_pool_add_ons", json!({ "advanced_security_mode": "STRICT" }));
    expect_violation(
        validate(&raw),
        "user_pool_add_ons.advanced_security_mode",
        ViolationKind::DomainConstraint,
    )
}

#[test]
fn tag_values_must_be_strings() -> TestResult {
    let raw = with("tags", json!({ "env": "dev", "cost_center": 42 }));
    expect_violation(validate(&raw), "tags.cost_center", ViolationKind::TypeMismatch)
}

// ============================================================================
// SECTION: Security Attributes
// ============================================================================

#[test]
fn deletion_protection_is_case_sensitive() -> TestResult {
    let raw = with("deletion_protection", json!("active"));
    expect_violation(validate(&raw), "deletion_protection", ViolationKind::DomainConstraint)
}

#[test]
fn username_attributes_come_from_vocabulary() -> TestResult {
    let raw = with("username_attributes", json!(["email", "preferred_username"]));
    expect_violation(validate(&raw), "username_attributes[1]", ViolationKind::DomainConstraint)
}

#[test]
fn auto_verified_attributes_must_be_an_array() -> TestResult {
    let raw = with("auto_verified_attributes", json!("email"));
    expect_violation(validate(&raw), "auto_verified_attributes", ViolationKind::MalformedInput)
}
