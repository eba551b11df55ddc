// crates/userpool-core/tests/compose.rs
// ============================================================================
// Module: Composition Resolver Tests
// Description: Resource presence, counts, ordering, and derived attributes.
// Purpose: Pin down which intents a validated configuration produces.
// ============================================================================

//! ## Overview
//! Covers enablement suppression, per-class emission, deterministic ordering,
//! and the attributes the resolver derives (rotation inheritance, add-ons,
//! custom domains, OAuth enablement).

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
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use userpool_core::AdditionalFlowsMode;
use userpool_core::AdvancedSecurityMode;
use userpool_core::ClientConfig;
use userpool_core::ClientKey;
use userpool_core::CompositionResult;
use userpool_core::DeletionProtection;
use userpool_core::DomainConfig;
use userpool_core::GroupConfig;
use userpool_core::IntentAttributes;
use userpool_core::IntentBuilder;
use userpool_core::OAuthFlow;
use userpool_core::RefreshTokenRotation;
use userpool_core::ResourceKind;
use userpool_core::UserAttribute;
use userpool_core::UserPoolAddOns;
use userpool_core::compose;

use crate::common::full_pool;
use crate::common::minimal_pool;
use crate::common::pool_with_clients;

type TestResult = Result<(), String>;

fn client_attrs<'a>(
    result: &'a CompositionResult,
    key: &str,
) -> Result<&'a userpool_core::ClientIntent, String> {
    let address = format!("aws_cognito_user_pool_client.client[\"{key}\"]");
    match result.get(&address).map(userpool_core::ResourceIntent::attributes) {
        Some(IntentAttributes::Client(client)) => Ok(client),
        other => Err(format!("expected client intent at {address}, got {other:?}")),
    }
}

fn pool_attrs(result: &CompositionResult) -> Result<&userpool_core::UserPoolIntent, String> {
    match result.intents().first().map(userpool_core::ResourceIntent::attributes) {
        Some(IntentAttributes::UserPool(pool)) => Ok(pool),
        other => Err(format!("expected user pool intent first, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Enablement
// ============================================================================

/// Tests a disabled pool plans nothing even with every block configured.
#[test]
fn disabled_pool_emits_no_intents() {
    let mut config = full_pool();
    config.enabled = false;
    assert!(compose(&config).is_empty());
}

/// Tests ignore_schema_changes suppresses an enabled pool.
#[test]
fn ignore_schema_changes_dominates_enabled() {
    let mut config = full_pool();
    config.ignore_schema_changes = true;
    assert!(config.enabled);
    assert!(compose(&config).is_empty());
}

/// Tests both suppression flags together still plan nothing.
#[test]
fn both_flags_suppress() {
    let mut config = full_pool();
    config.enabled = false;
    config.ignore_schema_changes = true;
    assert_eq!(compose(&config).len(), 0);
}

/// Tests a minimal enabled pool plans exactly the pool.
#[test]
fn minimal_pool_emits_only_pool() {
    let result = compose(&minimal_pool());
    assert_eq!(result.len(), 1);
    assert_eq!(result.count(ResourceKind::UserPool), 1);
    assert_eq!(result.intents()[0].address().as_str(), "aws_cognito_user_pool.pool");
}

// ============================================================================
// SECTION: Counts and Ordering
// ============================================================================

/// Tests two clients yield one pool plus two clients.
#[test]
fn two_clients_yield_three_intents() {
    let result = compose(&pool_with_clients(&["c1", "c2"]));
    assert_eq!(result.len(), 3);
    assert_eq!(result.count(ResourceKind::UserPoolClient), 2);
}

/// Tests a domain adds exactly one intent.
#[test]
fn domain_adds_one_intent() {
    let mut config = pool_with_clients(&["c1"]);
    config.domain = Some(DomainConfig::new("test-domain"));
    let result = compose(&config);
    assert_eq!(result.len(), 3);
    assert_eq!(result.count(ResourceKind::UserPoolDomain), 1);
}

/// Tests emission order: pool, clients by key, domain, groups by input order.
#[test]
fn intents_follow_deterministic_order() {
    let mut config = full_pool();
    config.user_groups = vec![GroupConfig::new("zeta"), GroupConfig::new("alpha")];
    let plan = compose(&config);
    let addresses: Vec<&str> =
        plan.intents().iter().map(|intent| intent.address().as_str()).collect();
    assert_eq!(
        addresses,
        vec![
            "aws_cognito_user_pool.pool",
            "aws_cognito_user_pool_client.client[\"mobile\"]",
            "aws_cognito_user_pool_client.client[\"web\"]",
            "aws_cognito_user_pool_domain.domain",
            "aws_cognito_user_group.main[\"zeta\"]",
            "aws_cognito_user_group.main[\"alpha\"]",
        ]
    );
}

/// Tests duplicate group precedences are passed through unchanged.
#[test]
fn duplicate_precedences_are_preserved() -> TestResult {
    let mut config = minimal_pool();
    let mut first = GroupConfig::new("a");
    first.precedence = Some(1);
    let mut second = GroupConfig::new("b");
    second.precedence = Some(1);
    config.user_groups = vec![first, second];
    let result = compose(&config);
    assert_eq!(result.count(ResourceKind::UserGroup), 2);
    for intent in &result.intents()[1 ..] {
        match intent.attributes() {
            IntentAttributes::Group(group) => assert_eq!(group.precedence, Some(1)),
            other => return Err(format!("expected group, got {other:?}")),
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Derived Attributes
// ============================================================================

/// Tests clients inherit the pool-wide rotation unless they set their own.
#[test]
fn client_rotation_inherits_pool_default() -> TestResult {
    let mut config = pool_with_clients(&["inherits", "overrides"]);
    config.refresh_token_rotation = Some(RefreshTokenRotation::rotate(60));
    if let Some(client) = config.clients.get_mut(&ClientKey::new("overrides")) {
        client.refresh_token_rotation = Some(RefreshTokenRotation::disabled());
    }
    let result = compose(&config);
    assert_eq!(
        client_attrs(&result, "inherits")?.refresh_token_rotation,
        Some(RefreshTokenRotation::rotate(60))
    );
    assert_eq!(
        client_attrs(&result, "overrides")?.refresh_token_rotation,
        Some(RefreshTokenRotation::disabled())
    );
    Ok(())
}

/// Tests OAuth enablement is derived from the allowed flow set.
#[test]
fn oauth_enablement_follows_flows() -> TestResult {
    let mut config = minimal_pool();
    let mut oauth = ClientConfig::new("oauth");
    oauth.allowed_oauth_flows.insert(OAuthFlow::Code);
    oauth.callback_urls.push(String::from("https://example.com/callback"));
    config.clients.insert(ClientKey::new("oauth"), oauth);
    config.clients.insert(ClientKey::new("plain"), ClientConfig::new("plain"));
    let result = compose(&config);
    assert!(client_attrs(&result, "oauth")?.allowed_oauth_flows_user_pool_client);
    assert!(!client_attrs(&result, "plain")?.allowed_oauth_flows_user_pool_client);
    assert!(client_attrs(&result, "plain")?.enable_token_revocation);
    Ok(())
}

/// Tests pool security attributes pass through unchanged.
#[test]
fn security_attributes_pass_through() -> TestResult {
    let mut config = minimal_pool();
    config.deletion_protection = DeletionProtection::Active;
    config.auto_verified_attributes.insert(UserAttribute::Email);
    config.username_attributes.insert(UserAttribute::PhoneNumber);
    let result = compose(&config);
    let pool = pool_attrs(&result)?;
    assert_eq!(pool.deletion_protection, DeletionProtection::Active);
    assert!(pool.auto_verified_attributes.contains(&UserAttribute::Email));
    assert!(pool.username_attributes.contains(&UserAttribute::PhoneNumber));
    assert_eq!(pool.username_attributes.len(), 1);
    Ok(())
}

/// Tests the add-on block is absent unless advanced security is configured.
#[test]
fn add_ons_only_when_configured() -> TestResult {
    let result = compose(&minimal_pool());
    assert_eq!(pool_attrs(&result)?.user_pool_add_ons, None);

    let mut flows_only = minimal_pool();
    flows_only.advanced_security_additional_flows = Some(AdditionalFlowsMode::Audit);
    let result = compose(&flows_only);
    let add_ons = pool_attrs(&result)?.user_pool_add_ons.ok_or("missing add-ons")?;
    assert_eq!(add_ons.advanced_security_mode, AdvancedSecurityMode::Off);
    assert_eq!(add_ons.advanced_security_additional_flows, Some(AdditionalFlowsMode::Audit));

    let mut enforced = minimal_pool();
    enforced.user_pool_add_ons = Some(UserPoolAddOns {
        advanced_security_mode: AdvancedSecurityMode::Enforced,
    });
    let result = compose(&enforced);
    let add_ons = pool_attrs(&result)?.user_pool_add_ons.ok_or("missing add-ons")?;
    assert_eq!(add_ons.advanced_security_mode, AdvancedSecurityMode::Enforced);
    assert_eq!(add_ons.advanced_security_additional_flows, None);
    Ok(())
}

/// Tests a certificate marks the domain as custom.
#[test]
fn certificate_marks_custom_domain() -> TestResult {
    let mut config = minimal_pool();
    config.domain = Some(DomainConfig {
        domain: String::from("auth.example.com"),
        certificate_arn: Some(String::from("arn:aws:acm:us-east-1:123456789012:certificate/abc")),
    });
    let result = compose(&config);
    match result.get("aws_cognito_user_pool_domain.domain").map(|i| i.attributes()) {
        Some(IntentAttributes::Domain(domain)) => {
            assert!(domain.custom_domain);
            assert_eq!(domain.user_pool_address.as_str(), "aws_cognito_user_pool.pool");
            Ok(())
        }
        other => Err(format!("expected domain intent, got {other:?}")),
    }
}

/// Tests the builder can be driven directly and reports its size.
#[test]
fn builder_appends_in_call_order() {
    let config = minimal_pool();
    let mut builder = IntentBuilder::new();
    assert!(builder.is_empty());
    builder.push_group(&GroupConfig::new("g")).push_user_pool(&config);
    assert_eq!(builder.len(), 2);
    let result = builder.finish();
    assert_eq!(result.intents()[0].kind(), ResourceKind::UserGroup);
    assert_eq!(result.intents()[1].kind(), ResourceKind::UserPool);
}

/// Tests composing twice yields identical results.
#[test]
fn composition_is_idempotent() {
    let config = full_pool();
    assert_eq!(compose(&config), compose(&config));
}
