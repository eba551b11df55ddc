// crates/userpool-core/src/runtime/compose.rs
// ============================================================================
// Module: Conditional Composition Resolver
// Description: Flag- and presence-driven emission of resource intents.
// Purpose: Decide which resources exist and derive their attributes.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! [`compose`] is a flat sequence of predicate checks feeding an
//! [`IntentBuilder`]:
//!
//! 1. nothing is emitted unless `enabled` is set and `ignore_schema_changes`
//!    is not;
//! 2. the user pool;
//! 3. one client per `clients` entry, in key order;
//! 4. the domain, when one was normalized;
//! 5. one group per `user_groups` entry, in input order.
//!
//! The function is pure, so composing the same configuration twice yields
//! identical results.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ClientConfig;
use crate::core::ClientIntent;
use crate::core::ClientKey;
use crate::core::CompositionResult;
use crate::core::DomainConfig;
use crate::core::DomainIntent;
use crate::core::GroupConfig;
use crate::core::GroupIntent;
use crate::core::RefreshTokenRotation;
use crate::core::ResourceAddress;
use crate::core::ResourceIntent;
use crate::core::UserPoolAddOnsIntent;
use crate::core::UserPoolConfig;
use crate::core::UserPoolIntent;
use crate::core::vocabulary::AdvancedSecurityMode;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Composes the resource plan for a validated configuration.
#[must_use]
pub fn compose(config: &UserPoolConfig) -> CompositionResult {
    let mut builder = IntentBuilder::new();
    if !config.creates_resources() {
        return builder.finish();
    }

    builder.push_user_pool(config);
    for (key, client) in &config.clients {
        builder.push_client(key, client, config.refresh_token_rotation);
    }
    if let Some(domain) = &config.domain {
        builder.push_domain(domain);
    }
    for group in &config.user_groups {
        builder.push_group(group);
    }
    builder.finish()
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Appends intents in emission order, deriving attributes on the way.
#[derive(Debug, Default)]
pub struct IntentBuilder {
    /// Intents emitted so far.
    intents: Vec<ResourceIntent>,
}

impl IntentBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intents: Vec::new(),
        }
    }

    /// Emits the user pool intent.
    pub fn push_user_pool(&mut self, config: &UserPoolConfig) -> &mut Self {
        let add_ons = derive_add_ons(config);
        self.intents.push(ResourceIntent::user_pool(UserPoolIntent {
            name: config.name.clone(),
            tier: config.tier,
            mfa_configuration: config.mfa_configuration,
            deletion_protection: config.deletion_protection,
            auto_verified_attributes: config.auto_verified_attributes.clone(),
            username_attributes: config.username_attributes.clone(),
            password_policy: config.password_policy,
            software_token_mfa_configuration: config.software_token_mfa_configuration,
            user_pool_add_ons: add_ons,
            account_recovery_setting: config.account_recovery_setting.clone(),
            device_configuration: config.device_configuration,
            tags: config.tags.clone(),
        }));
        self
    }

    /// Emits a client intent; `pool_rotation` applies when the client has none.
    pub fn push_client(
        &mut self,
        key: &ClientKey,
        client: &ClientConfig,
        pool_rotation: Option<RefreshTokenRotation>,
    ) -> &mut Self {
        self.intents.push(ResourceIntent::client(ClientIntent {
            user_pool_address: ResourceAddress::user_pool(),
            key: key.clone(),
            name: client.name.clone(),
            explicit_auth_flows: client.explicit_auth_flows.clone(),
            prevent_user_existence_errors: client.prevent_user_existence_errors,
            enable_token_revocation: client.enable_token_revocation,
            enable_propagate_additional_user_context_data: client
                .enable_propagate_additional_user_context_data,
            generate_secret: client.generate_secret,
            access_token_validity: client.access_token_validity,
            id_token_validity: client.id_token_validity,
            refresh_token_validity: client.refresh_token_validity,
            callback_urls: client.callback_urls.clone(),
            logout_urls: client.logout_urls.clone(),
            allowed_oauth_flows: client.allowed_oauth_flows.clone(),
            allowed_oauth_scopes: client.allowed_oauth_scopes.clone(),
            allowed_oauth_flows_user_pool_client: !client.allowed_oauth_flows.is_empty(),
            refresh_token_rotation: client.refresh_token_rotation.or(pool_rotation),
        }));
        self
    }

    /// Emits the hosted domain intent.
    pub fn push_domain(&mut self, domain: &DomainConfig) -> &mut Self {
        self.intents.push(ResourceIntent::domain(DomainIntent {
            user_pool_address: ResourceAddress::user_pool(),
            domain: domain.domain.clone(),
            certificate_arn: domain.certificate_arn.clone(),
            custom_domain: domain.is_custom(),
        }));
        self
    }

    /// Emits a group intent.
    pub fn push_group(&mut self, group: &GroupConfig) -> &mut Self {
        self.intents.push(ResourceIntent::group(GroupIntent {
            user_pool_address: ResourceAddress::user_pool(),
            name: group.name.clone(),
            description: group.description.clone(),
            precedence: group.precedence,
            role_arn: group.role_arn.clone(),
        }));
        self
    }

    /// Number of intents emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Returns true when nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Finalizes the plan.
    #[must_use]
    pub fn finish(self) -> CompositionResult {
        CompositionResult::new(self.intents)
    }
}

// ============================================================================
// SECTION: Derivations
// ============================================================================

/// Builds the add-on block when either advanced security setting is present.
fn derive_add_ons(config: &UserPoolConfig) -> Option<UserPoolAddOnsIntent> {
    let mode = config.user_pool_add_ons.map(|add_ons| add_ons.advanced_security_mode);
    let flows = config.advanced_security_additional_flows;
    if mode.is_none() && flows.is_none() {
        return None;
    }
    Some(UserPoolAddOnsIntent {
        advanced_security_mode: mode.unwrap_or(AdvancedSecurityMode::Off),
        advanced_security_additional_flows: flows,
    })
}
