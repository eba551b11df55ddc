// crates/userpool-core/src/core/intent.rs
// ============================================================================
// Module: Resource Intents
// Description: Unmaterialized descriptions of resources to provision.
// Purpose: Define the composition output handed to the provisioning collaborator.
// Dependencies: serde, crate::core::{hashing, identifiers, model, vocabulary}
// ============================================================================

//! ## Overview
//! A [`ResourceIntent`] names one resource the provisioning collaborator
//! should materialize, together with the attributes derived for it. Intents
//! are built only through their constructors so that the address, kind, and
//! attribute payload always agree.
//!
//! A [`CompositionResult`] is the ordered list of intents for one
//! configuration: the user pool first, then clients in key order, then the
//! domain, then groups in input order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::ClientKey;
use crate::core::identifiers::ResourceAddress;
use crate::core::model::AccountRecoverySetting;
use crate::core::model::DeviceConfiguration;
use crate::core::model::PasswordPolicy;
use crate::core::model::RefreshTokenRotation;
use crate::core::model::SoftwareTokenMfaConfig;
use crate::core::vocabulary::AdditionalFlowsMode;
use crate::core::vocabulary::AdvancedSecurityMode;
use crate::core::vocabulary::DeletionProtection;
use crate::core::vocabulary::ExplicitAuthFlow;
use crate::core::vocabulary::MfaConfiguration;
use crate::core::vocabulary::OAuthFlow;
use crate::core::vocabulary::PreventUserExistenceErrors;
use crate::core::vocabulary::Tier;
use crate::core::vocabulary::UserAttribute;

// ============================================================================
// SECTION: Resource Kinds
// ============================================================================

/// Class of a planned resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// The user pool itself.
    UserPool,
    /// An application client.
    UserPoolClient,
    /// The hosted domain.
    UserPoolDomain,
    /// A user group.
    UserGroup,
}

impl ResourceKind {
    /// Returns the snake_case label used in serialized plans.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserPool => "user_pool",
            Self::UserPoolClient => "user_pool_client",
            Self::UserPoolDomain => "user_pool_domain",
            Self::UserGroup => "user_group",
        }
    }
}

// ============================================================================
// SECTION: Attribute Payloads
// ============================================================================

/// Derived attributes of the user pool resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPoolIntent {
    /// Pool name.
    pub name: String,
    /// Feature tier.
    pub tier: Tier,
    /// MFA enforcement mode.
    pub mfa_configuration: MfaConfiguration,
    /// Deletion protection mode.
    pub deletion_protection: DeletionProtection,
    /// Attributes verified automatically on sign-up.
    pub auto_verified_attributes: BTreeSet<UserAttribute>,
    /// Attributes accepted as the username.
    pub username_attributes: BTreeSet<UserAttribute>,
    /// Password policy, when configured.
    pub password_policy: Option<PasswordPolicy>,
    /// Software token MFA settings, when configured.
    pub software_token_mfa_configuration: Option<SoftwareTokenMfaConfig>,
    /// Add-on block, present only when an advanced security setting is configured.
    pub user_pool_add_ons: Option<UserPoolAddOnsIntent>,
    /// Account recovery settings, when configured.
    pub account_recovery_setting: Option<AccountRecoverySetting>,
    /// Device tracking settings, when configured.
    pub device_configuration: Option<DeviceConfiguration>,
    /// Resource tags.
    pub tags: BTreeMap<String, String>,
}

/// Derived add-on block of the user pool resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserPoolAddOnsIntent {
    /// Adaptive authentication mode (`OFF` when only additional flows are set).
    pub advanced_security_mode: AdvancedSecurityMode,
    /// Mode applied to additional auth flows.
    pub advanced_security_additional_flows: Option<AdditionalFlowsMode>,
}

/// Derived attributes of a client resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientIntent {
    /// Address of the owning pool.
    pub user_pool_address: ResourceAddress,
    /// Configuration key of the client.
    pub key: ClientKey,
    /// Client name.
    pub name: String,
    /// Allowed authentication flows.
    pub explicit_auth_flows: BTreeSet<ExplicitAuthFlow>,
    /// User-existence error disclosure mode.
    pub prevent_user_existence_errors: Option<PreventUserExistenceErrors>,
    /// Whether refresh tokens can be revoked.
    pub enable_token_revocation: bool,
    /// Whether additional user context data is propagated.
    pub enable_propagate_additional_user_context_data: bool,
    /// Whether a client secret is generated.
    pub generate_secret: bool,
    /// Access token validity in hours.
    pub access_token_validity: Option<u32>,
    /// ID token validity in hours.
    pub id_token_validity: Option<u32>,
    /// Refresh token validity in days.
    pub refresh_token_validity: Option<u32>,
    /// OAuth redirect URLs.
    pub callback_urls: Vec<String>,
    /// OAuth sign-out URLs.
    pub logout_urls: Vec<String>,
    /// Allowed OAuth grant types.
    pub allowed_oauth_flows: BTreeSet<OAuthFlow>,
    /// Allowed OAuth scopes.
    pub allowed_oauth_scopes: BTreeSet<String>,
    /// True when any OAuth flow is allowed.
    pub allowed_oauth_flows_user_pool_client: bool,
    /// Effective rotation after pool-wide inheritance.
    pub refresh_token_rotation: Option<RefreshTokenRotation>,
}

/// Derived attributes of the hosted domain resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainIntent {
    /// Address of the owning pool.
    pub user_pool_address: ResourceAddress,
    /// Domain prefix or custom domain name.
    pub domain: String,
    /// Certificate for a custom domain.
    pub certificate_arn: Option<String>,
    /// True when a certificate is attached.
    pub custom_domain: bool,
}

/// Derived attributes of a user group resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupIntent {
    /// Address of the owning pool.
    pub user_pool_address: ResourceAddress,
    /// Group name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional precedence.
    pub precedence: Option<u32>,
    /// Optional IAM role.
    pub role_arn: Option<String>,
}

/// Attribute payload of an intent, one variant per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntentAttributes {
    /// User pool attributes.
    UserPool(UserPoolIntent),
    /// Client attributes.
    Client(ClientIntent),
    /// Domain attributes.
    Domain(DomainIntent),
    /// Group attributes.
    Group(GroupIntent),
}

// ============================================================================
// SECTION: Resource Intent
// ============================================================================

/// A single resource the provisioning collaborator should create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIntent {
    /// Stable resource address.
    address: ResourceAddress,
    /// Resource class.
    kind: ResourceKind,
    /// Derived attributes.
    attributes: IntentAttributes,
}

impl ResourceIntent {
    /// Intent for the user pool.
    #[must_use]
    pub fn user_pool(attributes: UserPoolIntent) -> Self {
        Self {
            address: ResourceAddress::user_pool(),
            kind: ResourceKind::UserPool,
            attributes: IntentAttributes::UserPool(attributes),
        }
    }

    /// Intent for a client, addressed by its configuration key.
    #[must_use]
    pub fn client(attributes: ClientIntent) -> Self {
        Self {
            address: ResourceAddress::client(&attributes.key),
            kind: ResourceKind::UserPoolClient,
            attributes: IntentAttributes::Client(attributes),
        }
    }

    /// Intent for the hosted domain.
    #[must_use]
    pub fn domain(attributes: DomainIntent) -> Self {
        Self {
            address: ResourceAddress::domain(),
            kind: ResourceKind::UserPoolDomain,
            attributes: IntentAttributes::Domain(attributes),
        }
    }

    /// Intent for a group, addressed by its name.
    #[must_use]
    pub fn group(attributes: GroupIntent) -> Self {
        Self {
            address: ResourceAddress::group(&attributes.name),
            kind: ResourceKind::UserGroup,
            attributes: IntentAttributes::Group(attributes),
        }
    }

    /// Returns the resource address.
    #[must_use]
    pub const fn address(&self) -> &ResourceAddress {
        &self.address
    }

    /// Returns the resource kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the derived attributes.
    #[must_use]
    pub const fn attributes(&self) -> &IntentAttributes {
        &self.attributes
    }
}

// ============================================================================
// SECTION: Composition Result
// ============================================================================

/// Ordered resource intents produced for one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompositionResult {
    /// Intents in emission order.
    intents: Vec<ResourceIntent>,
}

impl CompositionResult {
    /// Wraps an already ordered intent list.
    #[must_use]
    pub const fn new(intents: Vec<ResourceIntent>) -> Self {
        Self {
            intents,
        }
    }

    /// Returns the intents in emission order.
    #[must_use]
    pub fn intents(&self) -> &[ResourceIntent] {
        &self.intents
    }

    /// Total number of intents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Returns true when nothing is planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Number of intents of `kind`.
    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.intents.iter().filter(|intent| intent.kind == kind).count()
    }

    /// Finds an intent by address.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<&ResourceIntent> {
        self.intents.iter().find(|intent| intent.address.as_str() == address)
    }

    /// Addresses in emission order.
    pub fn addresses(&self) -> impl Iterator<Item = &ResourceAddress> {
        self.intents.iter().map(ResourceIntent::address)
    }

    /// Content digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the plan cannot be canonicalized.
    pub fn digest(&self) -> Result<HashDigest, HashError> {
        hash_canonical_json(DEFAULT_HASH_ALGORITHM, self)
    }
}
