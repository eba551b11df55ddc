// crates/userpool-config/src/normalize.rs
// ============================================================================
// Module: Configuration Normalizer
// Description: Shape checking and canonicalization of raw configuration.
// Purpose: Turn a loosely typed document into one canonical shape.
// Dependencies: serde_json, userpool-core
// ============================================================================

//! ## Overview
//! The normalizer walks the raw JSON document once. It rejects unknown keys,
//! wrong container shapes, and wrong primitive types, applies boolean
//! defaults, and collapses the polymorphic `domain` input into a single
//! [`DomainConfig`]. Vocabulary and range checks are left to the validators,
//! so enumerated settings are carried through as plain strings and integers.
//!
//! ## Invariants
//! - Types are never coerced: `"true"` is not a boolean and `1` is not `true`.
//! - `null` is treated as absent for every key.
//! - A field that fails here is left unset, so validators never report the
//!   same path twice.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Value;
use userpool_core::DeviceConfiguration;
use userpool_core::DomainConfig;
use userpool_core::SoftwareTokenMfaConfig;

use crate::error::Violations;

// ============================================================================
// SECTION: Key Sets
// ============================================================================

/// Path reported for the document root.
pub const ROOT_PATH: &str = "$";

/// Keys accepted at the document root.
pub const ROOT_KEYS: &[&str] = &[
    "user_pool_name",
    "enabled",
    "ignore_schema_changes",
    "user_pool_tier",
    "mfa_configuration",
    "deletion_protection",
    "auto_verified_attributes",
    "username_attributes",
    "password_policy",
    "refresh_token_rotation",
    "advanced_security_additional_flows",
    "user_pool_add_ons",
    "domain",
    "clients",
    "user_groups",
    "account_recovery_setting",
    "device_configuration",
    "software_token_mfa_configuration",
    "tags",
];
/// Keys accepted in `password_policy`.
pub const PASSWORD_POLICY_KEYS: &[&str] = &[
    "minimum_length",
    "require_lowercase",
    "require_numbers",
    "require_symbols",
    "require_uppercase",
    "temporary_password_validity_days",
];
/// Keys accepted in a refresh token rotation block.
pub const ROTATION_KEYS: &[&str] = &["type", "retry_grace_period_seconds"];
/// Keys accepted in `user_pool_add_ons`.
pub const ADD_ONS_KEYS: &[&str] = &["advanced_security_mode"];
/// Keys accepted in an object-shaped `domain`.
pub const DOMAIN_KEYS: &[&str] = &["domain", "certificate_arn"];
/// Keys accepted in a client entry.
pub const CLIENT_KEYS: &[&str] = &[
    "name",
    "explicit_auth_flows",
    "prevent_user_existence_errors",
    "enable_token_revocation",
    "enable_propagate_additional_user_context_data",
    "generate_secret",
    "access_token_validity",
    "id_token_validity",
    "refresh_token_validity",
    "callback_urls",
    "logout_urls",
    "allowed_oauth_flows",
    "allowed_oauth_scopes",
    "refresh_token_rotation",
];
/// Keys accepted in a group entry.
pub const GROUP_KEYS: &[&str] = &["name", "description", "precedence", "role_arn"];
/// Keys accepted in `account_recovery_setting`.
pub const RECOVERY_KEYS: &[&str] = &["recovery_mechanisms"];
/// Keys accepted in a recovery mechanism entry.
pub const MECHANISM_KEYS: &[&str] = &["name", "priority"];
/// Keys accepted in `device_configuration`.
pub const DEVICE_KEYS: &[&str] =
    &["challenge_required_on_new_device", "device_only_remembered_on_user_prompt"];
/// Keys accepted in `software_token_mfa_configuration`.
pub const SOFTWARE_TOKEN_KEYS: &[&str] = &["enabled"];

// ============================================================================
// SECTION: Normalized Shapes
// ============================================================================

/// Canonical-shape configuration awaiting vocabulary and range checks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedConfig {
    /// Pool name (unset when missing or mistyped).
    pub user_pool_name: Option<String>,
    /// Enablement flag (default `true`).
    pub enabled: bool,
    /// Schema-change suppression flag (default `false`).
    pub ignore_schema_changes: bool,
    /// Raw tier token.
    pub user_pool_tier: Option<String>,
    /// Raw MFA token.
    pub mfa_configuration: Option<String>,
    /// Raw deletion protection token.
    pub deletion_protection: Option<String>,
    /// Raw auto-verified attribute tokens.
    pub auto_verified_attributes: Vec<String>,
    /// Raw username attribute tokens.
    pub username_attributes: Vec<String>,
    /// Password policy block.
    pub password_policy: Option<NormalizedPasswordPolicy>,
    /// Pool-wide rotation block.
    pub refresh_token_rotation: Option<NormalizedRotation>,
    /// Raw additional flows token.
    pub advanced_security_additional_flows: Option<String>,
    /// Add-ons block.
    pub user_pool_add_ons: Option<NormalizedAddOns>,
    /// Domain collapsed to one shape.
    pub domain: Option<DomainConfig>,
    /// Clients keyed by configuration key.
    pub clients: BTreeMap<String, NormalizedClient>,
    /// Groups in input order.
    pub user_groups: Vec<NormalizedGroup>,
    /// Account recovery block.
    pub account_recovery_setting: Option<NormalizedRecovery>,
    /// Device tracking settings.
    pub device_configuration: Option<DeviceConfiguration>,
    /// Software token MFA settings.
    pub software_token_mfa_configuration: Option<SoftwareTokenMfaConfig>,
    /// Resource tags.
    pub tags: BTreeMap<String, String>,
}

/// Password policy with defaults applied to the boolean requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizedPasswordPolicy {
    /// Raw minimum length.
    pub minimum_length: Option<i64>,
    /// Lowercase requirement.
    pub require_lowercase: bool,
    /// Digit requirement.
    pub require_numbers: bool,
    /// Symbol requirement.
    pub require_symbols: bool,
    /// Uppercase requirement.
    pub require_uppercase: bool,
    /// Raw temporary password validity.
    pub temporary_password_validity_days: Option<i64>,
}

/// Refresh token rotation block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedRotation {
    /// Raw rotation type token.
    pub rotation_type: Option<String>,
    /// Raw grace period, left untyped until the rotation type is known.
    pub retry_grace_period_seconds: Option<Value>,
}

/// Add-ons block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedAddOns {
    /// Raw advanced security mode token.
    pub advanced_security_mode: Option<String>,
}

/// Client entry with boolean defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedClient {
    /// Client name.
    pub name: Option<String>,
    /// Raw auth flow tokens.
    pub explicit_auth_flows: Vec<String>,
    /// Raw user-existence error mode.
    pub prevent_user_existence_errors: Option<String>,
    /// Token revocation (default `true`).
    pub enable_token_revocation: bool,
    /// Context data propagation (default `false`).
    pub enable_propagate_additional_user_context_data: bool,
    /// Secret generation (default `false`).
    pub generate_secret: bool,
    /// Raw access token validity.
    pub access_token_validity: Option<i64>,
    /// Raw ID token validity.
    pub id_token_validity: Option<i64>,
    /// Raw refresh token validity.
    pub refresh_token_validity: Option<i64>,
    /// Callback URLs.
    pub callback_urls: Vec<String>,
    /// Logout URLs.
    pub logout_urls: Vec<String>,
    /// Raw OAuth flow tokens.
    pub allowed_oauth_flows: Vec<String>,
    /// OAuth scopes.
    pub allowed_oauth_scopes: Vec<String>,
    /// Client-specific rotation block.
    pub refresh_token_rotation: Option<NormalizedRotation>,
}

/// Group entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedGroup {
    /// Group name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Raw precedence.
    pub precedence: Option<i64>,
    /// IAM role.
    pub role_arn: Option<String>,
}

/// Account recovery block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedRecovery {
    /// Mechanisms in input order.
    pub recovery_mechanisms: Vec<NormalizedMechanism>,
}

/// Recovery mechanism entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedMechanism {
    /// Raw mechanism name.
    pub name: Option<String>,
    /// Raw priority.
    pub priority: Option<i64>,
}

// ============================================================================
// SECTION: Normalizer
// ============================================================================

/// Single-pass normalizer recording shape and type violations.
pub struct Normalizer<'a> {
    /// Shared accumulator.
    violations: &'a mut Violations,
}

impl<'a> Normalizer<'a> {
    /// Creates a normalizer writing into `violations`.
    pub const fn new(violations: &'a mut Violations) -> Self {
        Self {
            violations,
        }
    }

    /// Normalizes the raw document.
    pub fn normalize(&mut self, raw: &Value) -> NormalizedConfig {
        let Some(map) = raw.as_object() else {
            self.violations.malformed(ROOT_PATH, "configuration must be an object");
            return NormalizedConfig::default();
        };
        self.reject_unknown_keys(map, "", ROOT_KEYS);

        NormalizedConfig {
            user_pool_name: self.required_string(map, "", "user_pool_name"),
            enabled: self.bool_or(map, "", "enabled", true),
            ignore_schema_changes: self.bool_or(map, "", "ignore_schema_changes", false),
            user_pool_tier: self.string(map, "", "user_pool_tier"),
            mfa_configuration: self.string(map, "", "mfa_configuration"),
            deletion_protection: self.string(map, "", "deletion_protection"),
            auto_verified_attributes: self.string_list(map, "", "auto_verified_attributes"),
            username_attributes: self.string_list(map, "", "username_attributes"),
            password_policy: self
                .object(map, "", "password_policy")
                .map(|(policy, path)| self.password_policy(policy, &path)),
            refresh_token_rotation: self
                .object(map, "", "refresh_token_rotation")
                .map(|(rotation, path)| self.rotation(rotation, &path)),
            advanced_security_additional_flows: self.string(
                map,
                "",
                "advanced_security_additional_flows",
            ),
            user_pool_add_ons: self.object(map, "", "user_pool_add_ons").map(|(add_ons, path)| {
                self.reject_unknown_keys(add_ons, &path, ADD_ONS_KEYS);
                NormalizedAddOns {
                    advanced_security_mode: self.required_string(
                        add_ons,
                        &path,
                        "advanced_security_mode",
                    ),
                }
            }),
            domain: self.domain(map),
            clients: self.clients(map),
            user_groups: self.groups(map),
            account_recovery_setting: self
                .object(map, "", "account_recovery_setting")
                .map(|(recovery, path)| self.recovery(recovery, &path)),
            device_configuration: self.object(map, "", "device_configuration").map(
                |(device, path)| {
                    self.reject_unknown_keys(device, &path, DEVICE_KEYS);
                    DeviceConfiguration {
                        challenge_required_on_new_device: self.bool_or(
                            device,
                            &path,
                            "challenge_required_on_new_device",
                            false,
                        ),
                        device_only_remembered_on_user_prompt: self.bool_or(
                            device,
                            &path,
                            "device_only_remembered_on_user_prompt",
                            false,
                        ),
                    }
                },
            ),
            software_token_mfa_configuration: self
                .object(map, "", "software_token_mfa_configuration")
                .map(|(token, path)| {
                    self.reject_unknown_keys(token, &path, SOFTWARE_TOKEN_KEYS);
                    SoftwareTokenMfaConfig {
                        enabled: self.bool_or(token, &path, "enabled", false),
                    }
                }),
            tags: self.tags(map),
        }
    }

    // ------------------------------------------------------------------------
    // Blocks
    // ------------------------------------------------------------------------

    /// Normalizes a password policy block.
    fn password_policy(
        &mut self,
        map: &Map<String, Value>,
        path: &str,
    ) -> NormalizedPasswordPolicy {
        self.reject_unknown_keys(map, path, PASSWORD_POLICY_KEYS);
        NormalizedPasswordPolicy {
            minimum_length: self.required_integer(map, path, "minimum_length"),
            require_lowercase: self.bool_or(map, path, "require_lowercase", false),
            require_numbers: self.bool_or(map, path, "require_numbers", false),
            require_symbols: self.bool_or(map, path, "require_symbols", false),
            require_uppercase: self.bool_or(map, path, "require_uppercase", false),
            temporary_password_validity_days: self.integer(
                map,
                path,
                "temporary_password_validity_days",
            ),
        }
    }

    /// Normalizes a refresh token rotation block.
    fn rotation(&mut self, map: &Map<String, Value>, path: &str) -> NormalizedRotation {
        self.reject_unknown_keys(map, path, ROTATION_KEYS);
        NormalizedRotation {
            rotation_type: self.required_string(map, path, "type"),
            retry_grace_period_seconds: present(map, "retry_grace_period_seconds").cloned(),
        }
    }

    /// Collapses `domain` into one shape.
    fn domain(&mut self, map: &Map<String, Value>) -> Option<DomainConfig> {
        let path = "domain";
        match present(map, path)? {
            Value::String(domain) => Some(DomainConfig::new(domain.clone())),
            Value::Object(object) => {
                self.reject_unknown_keys(object, path, DOMAIN_KEYS);
                if present(object, "domain").is_none() {
                    self.violations
                        .malformed(path, "domain object must contain a \"domain\" field");
                    return None;
                }
                let domain = self.string(object, path, "domain")?;
                Some(DomainConfig {
                    domain,
                    certificate_arn: self.string(object, path, "certificate_arn"),
                })
            }
            _ => {
                self.violations
                    .malformed(path, "must be a string or an object with a \"domain\" field");
                None
            }
        }
    }

    /// Normalizes the `clients` map.
    fn clients(&mut self, map: &Map<String, Value>) -> BTreeMap<String, NormalizedClient> {
        let mut clients = BTreeMap::new();
        let Some((entries, path)) = self.object(map, "", "clients") else {
            return clients;
        };
        for (key, value) in entries {
            let client_path = child(&path, key);
            let Some(client) = value.as_object() else {
                self.violations.malformed(client_path, "client must be an object");
                continue;
            };
            clients.insert(key.clone(), self.client(client, &client_path));
        }
        clients
    }

    /// Normalizes one client entry.
    fn client(&mut self, map: &Map<String, Value>, path: &str) -> NormalizedClient {
        self.reject_unknown_keys(map, path, CLIENT_KEYS);
        NormalizedClient {
            name: self.required_string(map, path, "name"),
            explicit_auth_flows: self.string_list(map, path, "explicit_auth_flows"),
            prevent_user_existence_errors: self.string(map, path, "prevent_user_existence_errors"),
            enable_token_revocation: self.bool_or(map, path, "enable_token_revocation", true),
            enable_propagate_additional_user_context_data: self.bool_or(
                map,
                path,
                "enable_propagate_additional_user_context_data",
                false,
            ),
            generate_secret: self.bool_or(map, path, "generate_secret", false),
            access_token_validity: self.integer(map, path, "access_token_validity"),
            id_token_validity: self.integer(map, path, "id_token_validity"),
            refresh_token_validity: self.integer(map, path, "refresh_token_validity"),
            callback_urls: self.string_list(map, path, "callback_urls"),
            logout_urls: self.string_list(map, path, "logout_urls"),
            allowed_oauth_flows: self.string_list(map, path, "allowed_oauth_flows"),
            allowed_oauth_scopes: self.string_list(map, path, "allowed_oauth_scopes"),
            refresh_token_rotation: self
                .object(map, path, "refresh_token_rotation")
                .map(|(rotation, rotation_path)| self.rotation(rotation, &rotation_path)),
        }
    }

    /// Normalizes the `user_groups` array.
    fn groups(&mut self, map: &Map<String, Value>) -> Vec<NormalizedGroup> {
        let Some((entries, path)) = self.array(map, "", "user_groups") else {
            return Vec::new();
        };
        let mut groups = Vec::with_capacity(entries.len());
        for (index, value) in entries.iter().enumerate() {
            let group_path = indexed(&path, index);
            let Some(group) = value.as_object() else {
                self.violations.malformed(group_path, "group must be an object");
                continue;
            };
            self.reject_unknown_keys(group, &group_path, GROUP_KEYS);
            groups.push(NormalizedGroup {
                name: self.required_string(group, &group_path, "name"),
                description: self.string(group, &group_path, "description"),
                precedence: self.integer(group, &group_path, "precedence"),
                role_arn: self.string(group, &group_path, "role_arn"),
            });
        }
        groups
    }

    /// Normalizes the account recovery block.
    fn recovery(&mut self, map: &Map<String, Value>, path: &str) -> NormalizedRecovery {
        self.reject_unknown_keys(map, path, RECOVERY_KEYS);
        let mut recovery = NormalizedRecovery::default();
        if present(map, "recovery_mechanisms").is_none() {
            self.violations.missing(child(path, "recovery_mechanisms"));
            return recovery;
        }
        let Some((entries, list_path)) = self.array(map, path, "recovery_mechanisms") else {
            return recovery;
        };
        for (index, value) in entries.iter().enumerate() {
            let entry_path = indexed(&list_path, index);
            let Some(entry) = value.as_object() else {
                self.violations.malformed(entry_path, "recovery mechanism must be an object");
                continue;
            };
            self.reject_unknown_keys(entry, &entry_path, MECHANISM_KEYS);
            recovery.recovery_mechanisms.push(NormalizedMechanism {
                name: self.required_string(entry, &entry_path, "name"),
                priority: self.required_integer(entry, &entry_path, "priority"),
            });
        }
        recovery
    }

    /// Normalizes the `tags` map.
    fn tags(&mut self, map: &Map<String, Value>) -> BTreeMap<String, String> {
        let mut tags = BTreeMap::new();
        let Some((entries, path)) = self.object(map, "", "tags") else {
            return tags;
        };
        for (key, value) in entries {
            match value {
                Value::String(text) => {
                    tags.insert(key.clone(), text.clone());
                }
                _ => self.violations.type_mismatch(child(&path, key), "tag value must be a string"),
            }
        }
        tags
    }

    // ------------------------------------------------------------------------
    // Field Readers
    // ------------------------------------------------------------------------

    /// Records every key not listed in `allowed`.
    fn reject_unknown_keys(&mut self, map: &Map<String, Value>, path: &str, allowed: &[&str]) {
        for key in map.keys() {
            if !allowed.contains(&key.as_str()) {
                self.violations.malformed(child(path, key), "unknown field");
            }
        }
    }

    /// Reads an optional string.
    fn string(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<String> {
        match present(map, key)? {
            Value::String(text) => Some(text.clone()),
            _ => {
                self.violations.type_mismatch(child(path, key), "must be a string");
                None
            }
        }
    }

    /// Reads a required string.
    fn required_string(
        &mut self,
        map: &Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<String> {
        if present(map, key).is_none() {
            self.violations.missing(child(path, key));
            return None;
        }
        self.string(map, path, key)
    }

    /// Reads a strict boolean, falling back to `default` when absent.
    fn bool_or(&mut self, map: &Map<String, Value>, path: &str, key: &str, default: bool) -> bool {
        match present(map, key) {
            None => default,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                self.violations.type_mismatch(child(path, key), "must be a boolean");
                default
            }
        }
    }

    /// Reads an optional integer.
    fn integer(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<i64> {
        let value = present(map, key)?;
        let number = integer_value(value);
        if number.is_none() {
            self.violations.type_mismatch(child(path, key), "must be an integer");
        }
        number
    }

    /// Reads a required integer.
    fn required_integer(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Option<i64> {
        if present(map, key).is_none() {
            self.violations.missing(child(path, key));
            return None;
        }
        self.integer(map, path, key)
    }

    /// Reads an optional nested object, returning it with its path.
    fn object<'v>(
        &mut self,
        map: &'v Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<(&'v Map<String, Value>, String)> {
        let value = present(map, key)?;
        let field_path = child(path, key);
        if let Some(object) = value.as_object() {
            Some((object, field_path))
        } else {
            self.violations.malformed(field_path, "must be an object");
            None
        }
    }

    /// Reads an optional array, returning it with its path.
    fn array<'v>(
        &mut self,
        map: &'v Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<(&'v Vec<Value>, String)> {
        let value = present(map, key)?;
        let field_path = child(path, key);
        if let Some(array) = value.as_array() {
            Some((array, field_path))
        } else {
            self.violations.malformed(field_path, "must be an array");
            None
        }
    }

    /// Reads an optional array of strings.
    ///
    /// Any mistyped entry empties the list so later index paths stay aligned
    /// with the source document.
    fn string_list(&mut self, map: &Map<String, Value>, path: &str, key: &str) -> Vec<String> {
        let Some((entries, list_path)) = self.array(map, path, key) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(entries.len());
        let mut mistyped = false;
        for (index, value) in entries.iter().enumerate() {
            match value {
                Value::String(text) => out.push(text.clone()),
                _ => {
                    mistyped = true;
                    self.violations.type_mismatch(indexed(&list_path, index), "must be a string");
                }
            }
        }
        if mistyped {
            out.clear();
        }
        out
    }
}

// ============================================================================
// SECTION: Paths
// ============================================================================

/// Reads a JSON integer, saturating values beyond `i64` to `i64::MAX`.
#[must_use]
pub fn integer_value(value: &Value) -> Option<i64> {
    if let Some(number) = value.as_i64() {
        return Some(number);
    }
    value.as_u64().map(|_| i64::MAX)
}

/// Returns the value at `key` unless it is absent or `null`.
fn present<'v>(map: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// Joins a parent path and a key.
#[must_use]
pub fn child(parent: &str, key: &str) -> String {
    if parent.is_empty() { key.to_string() } else { format!("{parent}.{key}") }
}

/// Appends an array index to a path.
#[must_use]
pub fn indexed(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
