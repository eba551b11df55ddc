// crates/userpool-config/src/primitive.rs
// ============================================================================
// Module: Primitive Validators
// Description: Pure predicates over single scalar values.
// Purpose: Check vocabulary membership and numeric bounds with readable reasons.
// Dependencies: userpool-core
// ============================================================================

//! ## Overview
//! Every primitive check takes one value and returns either the accepted
//! (typed) value or the reason it was rejected. They never touch the
//! accumulator; composite validators decide where a failure is recorded.
//!
//! Vocabulary matching is exact and case-sensitive. An empty string is a
//! value, not an absence, and is rejected like any other unknown token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use userpool_core::AdditionalFlowsMode;
use userpool_core::DeletionProtection;
use userpool_core::MfaConfiguration;
use userpool_core::RotationType;
use userpool_core::Tier;
use userpool_core::Token;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Shortest allowed password minimum length.
pub const MIN_PASSWORD_LENGTH: i64 = 6;
/// Longest allowed password minimum length.
pub const MAX_PASSWORD_LENGTH: i64 = 99;
/// Longest refresh token retry grace period, in seconds.
pub const MAX_RETRY_GRACE_PERIOD_SECONDS: i64 = 86_400;
/// Longest temporary password validity, in days.
pub const MAX_TEMPORARY_PASSWORD_DAYS: i64 = 365;
/// Access and ID token validity bounds, in hours.
pub const TOKEN_VALIDITY_HOURS: (i64, i64) = (1, 24);
/// Refresh token validity bounds, in days.
pub const REFRESH_TOKEN_VALIDITY_DAYS: (i64, i64) = (1, 3650);
/// Highest group precedence.
pub const MAX_GROUP_PRECEDENCE: i64 = 2_147_483_647;
/// Recovery mechanism priority bounds.
pub const RECOVERY_PRIORITY: (i64, i64) = (1, 2);
/// Scopes every pool understands without a resource server.
pub const STANDARD_OAUTH_SCOPES: &[&str] =
    &["phone", "email", "openid", "profile", "aws.cognito.signin.user.admin"];

// ============================================================================
// SECTION: Generic Checks
// ============================================================================

/// Accepts exactly one of `T`'s tokens.
///
/// # Errors
///
/// Returns the rejection reason when `value` is not a legal token.
pub fn check_token<T: Token>(value: &str) -> Result<T, String> {
    T::from_token(value).ok_or_else(|| {
        let expected = T::tokens().join(", ");
        if value.is_empty() {
            format!("must be one of {expected}; empty string is not allowed")
        } else {
            format!("\"{value}\" is not one of {expected} (case-sensitive)")
        }
    })
}

/// Accepts `value` inside the inclusive range `[min, max]`.
///
/// # Errors
///
/// Returns the rejection reason when `value` is out of range.
pub fn check_range(value: i64, min: i64, max: i64) -> Result<i64, String> {
    if (min ..= max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside the allowed range {min}..={max}"))
    }
}

/// Accepts a string with at least one non-whitespace character.
///
/// # Errors
///
/// Returns the rejection reason when `value` is blank.
pub fn check_non_empty(value: &str) -> Result<&str, String> {
    if value.trim().is_empty() { Err(String::from("must be non-empty")) } else { Ok(value) }
}

// ============================================================================
// SECTION: Pool Settings
// ============================================================================

/// Checks the pool tier.
///
/// # Errors
///
/// Returns the rejection reason for anything but `LITE`, `ESSENTIALS`, `PLUS`.
pub fn check_tier(value: &str) -> Result<Tier, String> {
    check_token(value)
}

/// Checks the MFA mode.
///
/// # Errors
///
/// Returns the rejection reason for anything but `OFF`, `OPTIONAL`, `ON`.
pub fn check_mfa_configuration(value: &str) -> Result<MfaConfiguration, String> {
    check_token(value)
}

/// Checks the deletion protection mode.
///
/// # Errors
///
/// Returns the rejection reason for anything but `ACTIVE` or `INACTIVE`.
pub fn check_deletion_protection(value: &str) -> Result<DeletionProtection, String> {
    check_token(value)
}

/// Checks the advanced security mode for additional flows.
///
/// # Errors
///
/// Returns the rejection reason for anything but `AUDIT` or `ENFORCED`.
pub fn check_additional_flows(value: &str) -> Result<AdditionalFlowsMode, String> {
    check_token(value)
}

/// Checks the refresh token rotation type.
///
/// # Errors
///
/// Returns the rejection reason for anything but `rotate` or `disabled`.
pub fn check_rotation_type(value: &str) -> Result<RotationType, String> {
    check_token(value)
}

/// Checks a password minimum length.
///
/// # Errors
///
/// Returns the rejection reason outside `6..=99`.
pub fn check_password_length(value: i64) -> Result<u8, String> {
    let value = check_range(value, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)?;
    u8::try_from(value).map_err(|err| err.to_string())
}

/// Checks a refresh token retry grace period.
///
/// # Errors
///
/// Returns the rejection reason outside `0..=86400`.
pub fn check_grace_period(value: i64) -> Result<u32, String> {
    let value = check_range(value, 0, MAX_RETRY_GRACE_PERIOD_SECONDS)?;
    u32::try_from(value).map_err(|err| err.to_string())
}

// ============================================================================
// SECTION: Client Settings
// ============================================================================

/// Checks an OAuth callback or logout URL.
///
/// # Errors
///
/// Returns the rejection reason unless the URL is `https://` or a
/// `http://localhost` loopback.
pub fn check_redirect_url(value: &str) -> Result<(), String> {
    if value.chars().any(char::is_whitespace) {
        return Err(format!("\"{value}\" must not contain whitespace"));
    }
    let host_and_path = if let Some(rest) = value.strip_prefix("https://") {
        rest
    } else if let Some(rest) = value.strip_prefix("http://localhost") {
        if rest.is_empty() || rest.starts_with([':', '/']) {
            return Ok(());
        }
        return Err(format!("\"{value}\" must use https (http is only allowed for localhost)"));
    } else {
        return Err(format!("\"{value}\" must use https (http is only allowed for localhost)"));
    };
    if host_and_path.is_empty() || host_and_path.starts_with('/') {
        return Err(format!("\"{value}\" has no host"));
    }
    Ok(())
}

/// Checks an OAuth scope: a standard scope or a `resource-server/scope` pair.
///
/// # Errors
///
/// Returns the rejection reason for anything else.
pub fn check_oauth_scope(value: &str) -> Result<(), String> {
    if STANDARD_OAUTH_SCOPES.contains(&value) {
        return Ok(());
    }
    match value.split_once('/') {
        Some((server, scope))
            if !server.is_empty()
                && !scope.is_empty()
                && !value.chars().any(char::is_whitespace) =>
        {
            Ok(())
        }
        _ => Err(format!(
            "\"{value}\" is neither a standard scope ({}) nor a resource-server/scope pair",
            STANDARD_OAUTH_SCOPES.join(", ")
        )),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
