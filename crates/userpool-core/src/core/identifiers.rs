// crates/userpool-core/src/core/identifiers.rs
// ============================================================================
// Module: User Pool Identifiers
// Description: Opaque identifiers for clients and planned resources.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Identifiers are opaque and serialize as strings. Client keys come straight
//! from the configuration map; resource addresses are derived by the resolver
//! and follow the provisioning collaborator's `type.name["key"]` convention.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Key of a client entry in the configuration's `clients` map.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientKey(String);

impl ClientKey {
    /// Creates a new client key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ClientKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClientKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Stable address of a planned resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceAddress(String);

impl ResourceAddress {
    /// Address of the single user pool resource.
    #[must_use]
    pub fn user_pool() -> Self {
        Self(String::from("aws_cognito_user_pool.pool"))
    }

    /// Address of the client resource for `key`.
    #[must_use]
    pub fn client(key: &ClientKey) -> Self {
        Self(format!("aws_cognito_user_pool_client.client[\"{key}\"]"))
    }

    /// Address of the hosted domain resource.
    #[must_use]
    pub fn domain() -> Self {
        Self(String::from("aws_cognito_user_pool_domain.domain"))
    }

    /// Address of the group resource named `name`.
    #[must_use]
    pub fn group(name: &str) -> Self {
        Self(format!("aws_cognito_user_group.main[\"{name}\"]"))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
