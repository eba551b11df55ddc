// crates/userpool-core/src/core/model.rs
// ============================================================================
// Module: User Pool Configuration Model
// Description: Canonical, validated user pool configuration.
// Purpose: Provide the typed input consumed by the composition resolver.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The canonical model is what remains after raw input has been normalized
//! and validated. Enumerated settings are closed enums, polymorphic inputs
//! (such as the domain) have a single shape, and maps are ordered so that
//! every downstream consumer sees a deterministic view.
//!
//! Values are constructed fresh per invocation and never persisted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ClientKey;
use crate::core::vocabulary::AdditionalFlowsMode;
use crate::core::vocabulary::AdvancedSecurityMode;
use crate::core::vocabulary::DeletionProtection;
use crate::core::vocabulary::ExplicitAuthFlow;
use crate::core::vocabulary::MfaConfiguration;
use crate::core::vocabulary::OAuthFlow;
use crate::core::vocabulary::PreventUserExistenceErrors;
use crate::core::vocabulary::RecoveryMechanismName;
use crate::core::vocabulary::RotationType;
use crate::core::vocabulary::Tier;
use crate::core::vocabulary::UserAttribute;

// ============================================================================
// SECTION: User Pool
// ============================================================================

/// Canonical user pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoolConfig {
    /// User pool name.
    pub name: String,
    /// Whether any resource should be created.
    pub enabled: bool,
    /// Suppresses every resource to avoid schema-change replacement.
    pub ignore_schema_changes: bool,
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
    /// Optional password policy.
    pub password_policy: Option<PasswordPolicy>,
    /// Pool-wide refresh token rotation applied to clients without their own.
    pub refresh_token_rotation: Option<RefreshTokenRotation>,
    /// Advanced security mode for additional auth flows.
    pub advanced_security_additional_flows: Option<AdditionalFlowsMode>,
    /// Optional add-on settings.
    pub user_pool_add_ons: Option<UserPoolAddOns>,
    /// Optional hosted domain.
    pub domain: Option<DomainConfig>,
    /// Application clients keyed by configuration key.
    pub clients: BTreeMap<ClientKey, ClientConfig>,
    /// User groups in input order.
    pub user_groups: Vec<GroupConfig>,
    /// Optional account recovery settings.
    pub account_recovery_setting: Option<AccountRecoverySetting>,
    /// Optional device tracking settings.
    pub device_configuration: Option<DeviceConfiguration>,
    /// Optional software token MFA settings.
    pub software_token_mfa_configuration: Option<SoftwareTokenMfaConfig>,
    /// Resource tags.
    pub tags: BTreeMap<String, String>,
}

impl UserPoolConfig {
    /// Creates an enabled configuration with every optional block unset.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            ignore_schema_changes: false,
            tier: Tier::default(),
            mfa_configuration: MfaConfiguration::default(),
            deletion_protection: DeletionProtection::default(),
            auto_verified_attributes: BTreeSet::new(),
            username_attributes: BTreeSet::new(),
            password_policy: None,
            refresh_token_rotation: None,
            advanced_security_additional_flows: None,
            user_pool_add_ons: None,
            domain: None,
            clients: BTreeMap::new(),
            user_groups: Vec::new(),
            account_recovery_setting: None,
            device_configuration: None,
            software_token_mfa_configuration: None,
            tags: BTreeMap::new(),
        }
    }

    /// Returns true when the pool (and therefore anything else) is planned.
    ///
    /// `ignore_schema_changes` wins over `enabled`.
    #[must_use]
    pub const fn creates_resources(&self) -> bool {
        self.enabled && !self.ignore_schema_changes
    }
}

/// Password complexity requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum password length (6..=99).
    pub minimum_length: u8,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one digit.
    pub require_numbers: bool,
    /// Require at least one symbol.
    pub require_symbols: bool,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Days an admin-issued temporary password stays valid.
    pub temporary_password_validity_days: Option<u16>,
}

/// Refresh token rotation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRotation {
    /// Rotation behavior.
    #[serde(rename = "type")]
    pub rotation_type: RotationType,
    /// Grace period for retrying with the previous token; only set for `rotate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_grace_period_seconds: Option<u32>,
}

impl RefreshTokenRotation {
    /// Rotation with the given retry grace period.
    #[must_use]
    pub const fn rotate(retry_grace_period_seconds: u32) -> Self {
        Self {
            rotation_type: RotationType::Rotate,
            retry_grace_period_seconds: Some(retry_grace_period_seconds),
        }
    }

    /// Rotation turned off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            rotation_type: RotationType::Disabled,
            retry_grace_period_seconds: None,
        }
    }
}

/// User pool add-on settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoolAddOns {
    /// Adaptive authentication mode.
    pub advanced_security_mode: AdvancedSecurityMode,
}

/// Hosted domain, normalized from either a bare string or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Domain prefix or fully qualified custom domain.
    pub domain: String,
    /// ACM certificate for a custom domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
}

impl DomainConfig {
    /// Creates a prefix domain.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            certificate_arn: None,
        }
    }

    /// Returns true when a certificate turns this into a custom domain.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.certificate_arn.is_some()
    }
}

/// Account recovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecoverySetting {
    /// Recovery mechanisms ordered as configured.
    pub recovery_mechanisms: Vec<RecoveryMechanism>,
}

/// A single recovery mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryMechanism {
    /// Mechanism name.
    pub name: RecoveryMechanismName,
    /// Priority (1 is tried first).
    pub priority: u8,
}

/// Device tracking settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceConfiguration {
    /// Challenge users signing in from a new device.
    pub challenge_required_on_new_device: bool,
    /// Only remember devices when the user opts in.
    pub device_only_remembered_on_user_prompt: bool,
}

/// Software token (TOTP) MFA settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SoftwareTokenMfaConfig {
    /// Whether TOTP MFA is available.
    pub enabled: bool,
}

// ============================================================================
// SECTION: Clients
// ============================================================================

/// Application client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
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
    /// Client-specific refresh token rotation.
    pub refresh_token_rotation: Option<RefreshTokenRotation>,
}

impl ClientConfig {
    /// Creates a client with provider defaults (token revocation on).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit_auth_flows: BTreeSet::new(),
            prevent_user_existence_errors: None,
            enable_token_revocation: true,
            enable_propagate_additional_user_context_data: false,
            generate_secret: false,
            access_token_validity: None,
            id_token_validity: None,
            refresh_token_validity: None,
            callback_urls: Vec::new(),
            logout_urls: Vec::new(),
            allowed_oauth_flows: BTreeSet::new(),
            allowed_oauth_scopes: BTreeSet::new(),
            refresh_token_rotation: None,
        }
    }
}

// ============================================================================
// SECTION: Groups
// ============================================================================

/// User group configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Group name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional precedence; duplicates are allowed.
    pub precedence: Option<u32>,
    /// Optional IAM role assumed by group members.
    pub role_arn: Option<String>,
}

impl GroupConfig {
    /// Creates a group with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            precedence: None,
            role_arn: None,
        }
    }
}
