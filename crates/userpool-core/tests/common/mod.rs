// crates/userpool-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared builders for composition tests.
// Purpose: Keep canonical fixture configurations in one place.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use userpool_core::ClientConfig;
use userpool_core::ClientKey;
use userpool_core::DomainConfig;
use userpool_core::GroupConfig;
use userpool_core::UserPoolConfig;

/// Returns an enabled pool with no optional blocks.
pub fn minimal_pool() -> UserPoolConfig {
    UserPoolConfig::new("test-pool")
}

/// Returns a pool with the named clients (key and name identical).
pub fn pool_with_clients(keys: &[&str]) -> UserPoolConfig {
    let mut config = minimal_pool();
    for key in keys {
        config.clients.insert(ClientKey::new(*key), ClientConfig::new(*key));
    }
    config
}

/// Returns a pool exercising every resource class.
pub fn full_pool() -> UserPoolConfig {
    let mut config = pool_with_clients(&["web", "mobile"]);
    config.domain = Some(DomainConfig::new("test-domain"));
    config.user_groups = vec![GroupConfig::new("admins"), GroupConfig::new("users")];
    config
}
