// crates/userpool-config/src/validate.rs
// ============================================================================
// Module: Composite Validators
// Description: Structured-block validation and cross-field rules.
// Purpose: Convert a normalized document into the canonical typed model.
// Dependencies: userpool-core, crate::{error, normalize, primitive}
// ============================================================================

//! ## Overview
//! Composite validators combine primitive checks with cross-field rules for
//! each block of the normalized configuration. Each field path reports at
//! most its first violated rule; independent paths are all checked so a
//! single pass surfaces every mistake.
//!
//! The typed model returned by [`validate_config`] is only meaningful when
//! the accumulator is still empty afterwards; invalid parts are dropped or
//! replaced by defaults so checking can continue.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use userpool_core::AccountRecoverySetting;
use userpool_core::AdvancedSecurityMode;
use userpool_core::ClientConfig;
use userpool_core::ClientKey;
use userpool_core::DomainConfig;
use userpool_core::ExplicitAuthFlow;
use userpool_core::GroupConfig;
use userpool_core::OAuthFlow;
use userpool_core::PasswordPolicy;
use userpool_core::PreventUserExistenceErrors;
use userpool_core::RecoveryMechanism;
use userpool_core::RecoveryMechanismName;
use userpool_core::RefreshTokenRotation;
use userpool_core::RotationType;
use userpool_core::Token;
use userpool_core::UserPoolAddOns;
use userpool_core::UserPoolConfig;

use crate::error::Violations;
use crate::normalize::NormalizedAddOns;
use crate::normalize::NormalizedClient;
use crate::normalize::NormalizedConfig;
use crate::normalize::NormalizedGroup;
use crate::normalize::NormalizedPasswordPolicy;
use crate::normalize::NormalizedRecovery;
use crate::normalize::NormalizedRotation;
use crate::normalize::child;
use crate::normalize::indexed;
use crate::normalize::integer_value;
use crate::primitive::MAX_GROUP_PRECEDENCE;
use crate::primitive::MAX_TEMPORARY_PASSWORD_DAYS;
use crate::primitive::RECOVERY_PRIORITY;
use crate::primitive::REFRESH_TOKEN_VALIDITY_DAYS;
use crate::primitive::TOKEN_VALIDITY_HOURS;
use crate::primitive::check_additional_flows;
use crate::primitive::check_deletion_protection;
use crate::primitive::check_grace_period;
use crate::primitive::check_mfa_configuration;
use crate::primitive::check_non_empty;
use crate::primitive::check_oauth_scope;
use crate::primitive::check_password_length;
use crate::primitive::check_range;
use crate::primitive::check_redirect_url;
use crate::primitive::check_rotation_type;
use crate::primitive::check_tier;
use crate::primitive::check_token;

// ============================================================================
// SECTION: Root
// ============================================================================

/// Validates every block and builds the typed model.
pub fn validate_config(
    normalized: &NormalizedConfig,
    violations: &mut Violations,
) -> UserPoolConfig {
    let name = normalized
        .user_pool_name
        .as_deref()
        .and_then(|name| violations.check("user_pool_name", check_non_empty(name)))
        .unwrap_or_default()
        .to_string();

    let mut config = UserPoolConfig::new(name);
    config.enabled = normalized.enabled;
    config.ignore_schema_changes = normalized.ignore_schema_changes;
    if let Some(tier) = &normalized.user_pool_tier {
        config.tier = violations.check("user_pool_tier", check_tier(tier)).unwrap_or_default();
    }
    if let Some(mfa) = &normalized.mfa_configuration {
        config.mfa_configuration = violations
            .check("mfa_configuration", check_mfa_configuration(mfa))
            .unwrap_or_default();
    }
    if let Some(protection) = &normalized.deletion_protection {
        config.deletion_protection = violations
            .check("deletion_protection", check_deletion_protection(protection))
            .unwrap_or_default();
    }
    config.auto_verified_attributes =
        tokens(&normalized.auto_verified_attributes, "auto_verified_attributes", violations);
    config.username_attributes =
        tokens(&normalized.username_attributes, "username_attributes", violations);
    config.password_policy = normalized
        .password_policy
        .as_ref()
        .and_then(|policy| validate_password_policy(policy, "password_policy", violations));
    config.refresh_token_rotation = normalized.refresh_token_rotation.as_ref().and_then(|rotation| {
        validate_refresh_token_rotation(rotation, "refresh_token_rotation", violations)
    });
    config.advanced_security_additional_flows =
        normalized.advanced_security_additional_flows.as_deref().and_then(|flows| {
            violations
                .check("advanced_security_additional_flows", check_additional_flows(flows))
        });
    config.user_pool_add_ons = normalized
        .user_pool_add_ons
        .as_ref()
        .and_then(|add_ons| validate_add_ons(add_ons, "user_pool_add_ons", violations));
    config.domain =
        normalized.domain.as_ref().and_then(|domain| validate_domain(domain, violations));
    config.clients = validate_clients(&normalized.clients, violations);
    config.user_groups = validate_groups(&normalized.user_groups, violations);
    config.account_recovery_setting =
        normalized.account_recovery_setting.as_ref().and_then(|recovery| {
            validate_account_recovery(recovery, "account_recovery_setting", violations)
        });
    config.device_configuration = normalized.device_configuration;
    config.software_token_mfa_configuration = normalized.software_token_mfa_configuration;
    config.tags.clone_from(&normalized.tags);
    config
}

// ============================================================================
// SECTION: Pool Blocks
// ============================================================================

/// Validates a password policy; the boolean requirements are independent.
pub fn validate_password_policy(
    policy: &NormalizedPasswordPolicy,
    path: &str,
    violations: &mut Violations,
) -> Option<PasswordPolicy> {
    let minimum_length = policy.minimum_length.and_then(|length| {
        violations.check(&child(path, "minimum_length"), check_password_length(length))
    });
    let temporary_password_validity_days = match policy.temporary_password_validity_days {
        None => None,
        Some(days) => {
            let days = violations.check(
                &child(path, "temporary_password_validity_days"),
                check_range(days, 0, MAX_TEMPORARY_PASSWORD_DAYS),
            )?;
            Some(u16::try_from(days).ok()?)
        }
    };
    Some(PasswordPolicy {
        minimum_length: minimum_length?,
        require_lowercase: policy.require_lowercase,
        require_numbers: policy.require_numbers,
        require_symbols: policy.require_symbols,
        require_uppercase: policy.require_uppercase,
        temporary_password_validity_days,
    })
}

/// Validates a rotation block; the grace period only counts for `rotate`.
pub fn validate_refresh_token_rotation(
    rotation: &NormalizedRotation,
    path: &str,
    violations: &mut Violations,
) -> Option<RefreshTokenRotation> {
    let raw_type = rotation.rotation_type.as_deref()?;
    match violations.check(&child(path, "type"), check_rotation_type(raw_type))? {
        RotationType::Disabled => Some(RefreshTokenRotation::disabled()),
        RotationType::Rotate => {
            let grace_path = child(path, "retry_grace_period_seconds");
            let seconds = match rotation.retry_grace_period_seconds.as_ref() {
                None => 0,
                Some(value) => {
                    let Some(seconds) = integer_value(value) else {
                        violations.type_mismatch(grace_path, "must be an integer");
                        return None;
                    };
                    seconds
                }
            };
            let seconds = violations.check(&grace_path, check_grace_period(seconds))?;
            Some(RefreshTokenRotation::rotate(seconds))
        }
    }
}

/// Validates the add-ons block.
pub fn validate_add_ons(
    add_ons: &NormalizedAddOns,
    path: &str,
    violations: &mut Violations,
) -> Option<UserPoolAddOns> {
    let mode = add_ons.advanced_security_mode.as_deref()?;
    let advanced_security_mode = violations
        .check(&child(path, "advanced_security_mode"), check_token::<AdvancedSecurityMode>(mode))?;
    Some(UserPoolAddOns {
        advanced_security_mode,
    })
}

/// Validates the normalized domain.
pub fn validate_domain(domain: &DomainConfig, violations: &mut Violations) -> Option<DomainConfig> {
    violations.check("domain", check_non_empty(&domain.domain))?;
    if let Some(certificate) = &domain.certificate_arn {
        violations.check("domain.certificate_arn", check_non_empty(certificate))?;
    }
    Some(domain.clone())
}

/// Validates account recovery mechanisms.
pub fn validate_account_recovery(
    recovery: &NormalizedRecovery,
    path: &str,
    violations: &mut Violations,
) -> Option<AccountRecoverySetting> {
    let list_path = child(path, "recovery_mechanisms");
    let count = recovery.recovery_mechanisms.len();
    if !(1 ..= 2).contains(&count) {
        violations.constraint(&list_path, format!("must contain 1 or 2 mechanisms, found {count}"));
        return None;
    }

    let mut mechanisms = Vec::with_capacity(count);
    let mut seen_names = BTreeSet::new();
    let mut seen_priorities = BTreeSet::new();
    let mut valid = true;
    for (index, entry) in recovery.recovery_mechanisms.iter().enumerate() {
        let entry_path = indexed(&list_path, index);
        let name_path = child(&entry_path, "name");
        let name = entry.name.as_deref().and_then(|name| {
            let name = violations.check(&name_path, check_token::<RecoveryMechanismName>(name))?;
            if seen_names.insert(name) {
                Some(name)
            } else {
                violations.constraint(&name_path, format!("duplicate mechanism \"{name}\""));
                None
            }
        });
        let priority_path = child(&entry_path, "priority");
        let priority = entry.priority.and_then(|priority| {
            let priority = violations.check(
                &priority_path,
                check_range(priority, RECOVERY_PRIORITY.0, RECOVERY_PRIORITY.1),
            )?;
            if seen_priorities.insert(priority) {
                u8::try_from(priority).ok()
            } else {
                violations.constraint(&priority_path, format!("duplicate priority {priority}"));
                None
            }
        });
        match (name, priority) {
            (Some(name), Some(priority)) => mechanisms.push(RecoveryMechanism {
                name,
                priority,
            }),
            _ => valid = false,
        }
    }

    if seen_names.contains(&RecoveryMechanismName::AdminOnly) && seen_names.len() > 1 {
        violations.constraint(&list_path, "admin_only cannot be combined with other mechanisms");
        return None;
    }
    valid.then_some(AccountRecoverySetting {
        recovery_mechanisms: mechanisms,
    })
}

// ============================================================================
// SECTION: Clients
// ============================================================================

/// Validates every client entry.
pub fn validate_clients(
    clients: &BTreeMap<String, NormalizedClient>,
    violations: &mut Violations,
) -> BTreeMap<ClientKey, ClientConfig> {
    let mut out = BTreeMap::new();
    for (key, client) in clients {
        let path = child("clients", key);
        if let Some(config) = validate_client(client, &path, violations) {
            out.insert(ClientKey::new(key.clone()), config);
        }
    }
    out
}

/// Validates one client and its OAuth cross-field rules.
pub fn validate_client(
    client: &NormalizedClient,
    path: &str,
    violations: &mut Violations,
) -> Option<ClientConfig> {
    let before = violations.len();
    let name = client
        .name
        .as_deref()
        .and_then(|name| violations.check(&child(path, "name"), check_non_empty(name)))
        .unwrap_or_default();
    let mut config = ClientConfig::new(name);

    config.explicit_auth_flows = tokens::<ExplicitAuthFlow>(
        &client.explicit_auth_flows,
        &child(path, "explicit_auth_flows"),
        violations,
    );
    config.prevent_user_existence_errors =
        client.prevent_user_existence_errors.as_deref().and_then(|mode| {
            violations.check(
                &child(path, "prevent_user_existence_errors"),
                check_token::<PreventUserExistenceErrors>(mode),
            )
        });
    config.enable_token_revocation = client.enable_token_revocation;
    config.enable_propagate_additional_user_context_data =
        client.enable_propagate_additional_user_context_data;
    config.generate_secret = client.generate_secret;
    config.access_token_validity = validity(
        client.access_token_validity,
        &child(path, "access_token_validity"),
        TOKEN_VALIDITY_HOURS,
        violations,
    );
    config.id_token_validity = validity(
        client.id_token_validity,
        &child(path, "id_token_validity"),
        TOKEN_VALIDITY_HOURS,
        violations,
    );
    config.refresh_token_validity = validity(
        client.refresh_token_validity,
        &child(path, "refresh_token_validity"),
        REFRESH_TOKEN_VALIDITY_DAYS,
        violations,
    );
    config.callback_urls = urls(&client.callback_urls, &child(path, "callback_urls"), violations);
    config.logout_urls = urls(&client.logout_urls, &child(path, "logout_urls"), violations);
    config.allowed_oauth_flows = tokens::<OAuthFlow>(
        &client.allowed_oauth_flows,
        &child(path, "allowed_oauth_flows"),
        violations,
    );
    let scopes_path = child(path, "allowed_oauth_scopes");
    for (index, scope) in client.allowed_oauth_scopes.iter().enumerate() {
        if violations.check(&indexed(&scopes_path, index), check_oauth_scope(scope)).is_some() {
            config.allowed_oauth_scopes.insert(scope.clone());
        }
    }
    if !client.allowed_oauth_flows.is_empty() && client.callback_urls.is_empty() {
        violations.constraint(
            child(path, "callback_urls"),
            "at least one callback URL is required when allowed_oauth_flows is set",
        );
    }
    config.refresh_token_rotation = client.refresh_token_rotation.as_ref().and_then(|rotation| {
        let rotation_path = child(path, "refresh_token_rotation");
        validate_refresh_token_rotation(rotation, &rotation_path, violations)
    });

    (violations.len() == before && client.name.is_some()).then_some(config)
}

/// Checks each token of a list, keeping the legal ones as a set.
fn tokens<T: Token + Ord>(
    values: &[String],
    path: &str,
    violations: &mut Violations,
) -> BTreeSet<T> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            violations.check(&indexed(path, index), check_token::<T>(value))
        })
        .collect()
}

/// Checks each URL of a list.
fn urls(values: &[String], path: &str, violations: &mut Violations) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(index, url)| {
            violations.check(&indexed(path, *index), check_redirect_url(url)).is_some()
        })
        .map(|(_, url)| url.clone())
        .collect()
}

/// Checks an optional token validity against `(min, max)`.
fn validity(
    value: Option<i64>,
    path: &str,
    (min, max): (i64, i64),
    violations: &mut Violations,
) -> Option<u32> {
    let value = violations.check(path, check_range(value?, min, max))?;
    u32::try_from(value).ok()
}

// ============================================================================
// SECTION: Groups
// ============================================================================

/// Validates groups; names must be unique, precedences may repeat.
pub fn validate_groups(
    groups: &[NormalizedGroup],
    violations: &mut Violations,
) -> Vec<GroupConfig> {
    let mut out = Vec::with_capacity(groups.len());
    let mut seen = BTreeSet::new();
    for (index, group) in groups.iter().enumerate() {
        let path = indexed("user_groups", index);
        let name_path = child(&path, "name");
        let name = group.name.as_deref().and_then(|name| {
            let name = violations.check(&name_path, check_non_empty(name))?;
            if seen.insert(name.to_string()) {
                Some(name)
            } else {
                violations.constraint(&name_path, format!("duplicate group name \"{name}\""));
                None
            }
        });
        let precedence = match group.precedence {
            None => Some(None),
            Some(precedence) => violations
                .check(
                    &child(&path, "precedence"),
                    check_range(precedence, 0, MAX_GROUP_PRECEDENCE),
                )
                .and_then(|precedence| u32::try_from(precedence).ok())
                .map(Some),
        };
        if let (Some(name), Some(precedence)) = (name, precedence) {
            out.push(GroupConfig {
                name: name.to_string(),
                description: group.description.clone(),
                precedence,
                role_arn: group.role_arn.clone(),
            });
        }
    }
    out
}
