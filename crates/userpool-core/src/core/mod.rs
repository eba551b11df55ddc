// crates/userpool-core/src/core/mod.rs
// ============================================================================
// Module: User Pool Core Types
// Description: Canonical user pool model and resource intent structures.
// Purpose: Provide stable, serializable types shared by validation and planning.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the canonical user pool configuration, the closed
//! vocabularies it draws from, and the resource intents handed to the
//! provisioning collaborator. These types are the single source of truth for
//! every derived surface (CLI output, schema, audit events).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod hashing;
pub mod identifiers;
pub mod intent;
pub mod model;
pub mod vocabulary;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use hashing::canonical_json_bytes;
pub use hashing::hash_bytes;
pub use hashing::hash_canonical_json;
pub use identifiers::ClientKey;
pub use identifiers::ResourceAddress;
pub use intent::ClientIntent;
pub use intent::CompositionResult;
pub use intent::DomainIntent;
pub use intent::GroupIntent;
pub use intent::IntentAttributes;
pub use intent::ResourceIntent;
pub use intent::ResourceKind;
pub use intent::UserPoolAddOnsIntent;
pub use intent::UserPoolIntent;
pub use model::AccountRecoverySetting;
pub use model::ClientConfig;
pub use model::DeviceConfiguration;
pub use model::DomainConfig;
pub use model::GroupConfig;
pub use model::PasswordPolicy;
pub use model::RecoveryMechanism;
pub use model::RefreshTokenRotation;
pub use model::SoftwareTokenMfaConfig;
pub use model::UserPoolAddOns;
pub use model::UserPoolConfig;
pub use vocabulary::AdditionalFlowsMode;
pub use vocabulary::AdvancedSecurityMode;
pub use vocabulary::DeletionProtection;
pub use vocabulary::ExplicitAuthFlow;
pub use vocabulary::MfaConfiguration;
pub use vocabulary::OAuthFlow;
pub use vocabulary::PreventUserExistenceErrors;
pub use vocabulary::RecoveryMechanismName;
pub use vocabulary::RotationType;
pub use vocabulary::Tier;
pub use vocabulary::Token;
pub use vocabulary::UserAttribute;
