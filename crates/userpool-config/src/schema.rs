// crates/userpool-config/src/schema.rs
// ============================================================================
// Module: Config Schema
// Description: JSON schema builder for raw user pool configuration.
// Purpose: Publish the input contract for editors and external tooling.
// Dependencies: serde_json, userpool-core
// ============================================================================

//! ## Overview
//! The schema describes the raw document accepted by the normalizer. Enum
//! values come from the core vocabularies and bounds from the primitive
//! validator limits, so the schema cannot drift from validation. Cross-field
//! rules (OAuth callbacks, recovery combinations, unique group names) are
//! enforced by validation only.

use serde_json::Value;
use serde_json::json;
use userpool_core::AdditionalFlowsMode;
use userpool_core::AdvancedSecurityMode;
use userpool_core::DeletionProtection;
use userpool_core::ExplicitAuthFlow;
use userpool_core::MfaConfiguration;
use userpool_core::OAuthFlow;
use userpool_core::PreventUserExistenceErrors;
use userpool_core::RecoveryMechanismName;
use userpool_core::RotationType;
use userpool_core::Tier;
use userpool_core::Token;
use userpool_core::UserAttribute;

use crate::primitive::MAX_GROUP_PRECEDENCE;
use crate::primitive::MAX_PASSWORD_LENGTH;
use crate::primitive::MAX_RETRY_GRACE_PERIOD_SECONDS;
use crate::primitive::MAX_TEMPORARY_PASSWORD_DAYS;
use crate::primitive::MIN_PASSWORD_LENGTH;
use crate::primitive::RECOVERY_PRIORITY;
use crate::primitive::REFRESH_TOKEN_VALIDITY_DAYS;
use crate::primitive::TOKEN_VALIDITY_HOURS;

/// Returns the JSON schema for raw user pool configuration.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "userpool-plan://schemas/config.schema.json",
        "title": "User Pool Plan Configuration",
        "description": "Declarative user pool, client, domain, and group configuration.",
        "type": "object",
        "required": ["user_pool_name"],
        "properties": {
            "user_pool_name": non_empty_string("User pool name."),
            "enabled": boolean("Create any resources at all.", true),
            "ignore_schema_changes": boolean(
                "Suppress every resource to avoid schema-change replacement.",
                false
            ),
            "user_pool_tier": token_schema::<Tier>("Feature tier.", Some("ESSENTIALS")),
            "mfa_configuration": token_schema::<MfaConfiguration>(
                "MFA enforcement mode.",
                Some("OFF")
            ),
            "deletion_protection": token_schema::<DeletionProtection>(
                "Block deletion of the user pool.",
                Some("INACTIVE")
            ),
            "auto_verified_attributes": token_array::<UserAttribute>(),
            "username_attributes": token_array::<UserAttribute>(),
            "password_policy": password_policy_schema(),
            "refresh_token_rotation": rotation_schema(),
            "advanced_security_additional_flows": nullable(&token_schema::<AdditionalFlowsMode>(
                "Advanced security mode for custom and additional auth flows.",
                None
            )),
            "user_pool_add_ons": {
                "type": "object",
                "required": ["advanced_security_mode"],
                "properties": {
                    "advanced_security_mode": token_schema::<AdvancedSecurityMode>(
                        "Adaptive authentication mode.",
                        None
                    )
                },
                "additionalProperties": false
            },
            "domain": domain_schema(),
            "clients": {
                "type": "object",
                "description": "Application clients keyed by configuration key.",
                "additionalProperties": client_schema(),
                "default": {}
            },
            "user_groups": {
                "type": "array",
                "items": group_schema(),
                "default": []
            },
            "account_recovery_setting": recovery_schema(),
            "device_configuration": {
                "type": "object",
                "properties": {
                    "challenge_required_on_new_device": boolean(
                        "Challenge sign-ins from new devices.",
                        false
                    ),
                    "device_only_remembered_on_user_prompt": boolean(
                        "Remember devices only when the user opts in.",
                        false
                    )
                },
                "additionalProperties": false
            },
            "software_token_mfa_configuration": {
                "type": "object",
                "properties": {
                    "enabled": boolean("Allow TOTP MFA.", false)
                },
                "additionalProperties": false
            },
            "tags": {
                "type": "object",
                "additionalProperties": { "type": "string" },
                "default": {}
            }
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Pool Blocks
// ============================================================================

/// Schema for the password policy block.
fn password_policy_schema() -> Value {
    json!({
        "type": "object",
        "required": ["minimum_length"],
        "properties": {
            "minimum_length": {
                "type": "integer",
                "minimum": MIN_PASSWORD_LENGTH,
                "maximum": MAX_PASSWORD_LENGTH
            },
            "require_lowercase": boolean("Require a lowercase letter.", false),
            "require_numbers": boolean("Require a digit.", false),
            "require_symbols": boolean("Require a symbol.", false),
            "require_uppercase": boolean("Require an uppercase letter.", false),
            "temporary_password_validity_days": {
                "type": "integer",
                "minimum": 0,
                "maximum": MAX_TEMPORARY_PASSWORD_DAYS
            }
        },
        "additionalProperties": false
    })
}

/// Schema for a refresh token rotation block.
fn rotation_schema() -> Value {
    json!({
        "type": "object",
        "required": ["type"],
        "properties": {
            "type": token_schema::<RotationType>("Rotation behavior.", None),
            "retry_grace_period_seconds": {
                "description": "Checked only when type is rotate.",
                "default": 0
            }
        },
        "allOf": [
            {
                "if": { "properties": { "type": { "const": RotationType::Rotate.as_str() } } },
                "then": {
                    "properties": {
                        "retry_grace_period_seconds": {
                            "type": "integer",
                            "minimum": 0,
                            "maximum": MAX_RETRY_GRACE_PERIOD_SECONDS
                        }
                    }
                }
            }
        ],
        "additionalProperties": false
    })
}

/// Schema for the polymorphic domain.
fn domain_schema() -> Value {
    json!({
        "oneOf": [
            { "type": "null" },
            non_empty_string("Domain prefix."),
            {
                "type": "object",
                "required": ["domain"],
                "properties": {
                    "domain": non_empty_string("Domain prefix or custom domain."),
                    "certificate_arn": non_empty_string("Certificate for a custom domain.")
                },
                "additionalProperties": false
            }
        ]
    })
}

/// Schema for the account recovery block.
fn recovery_schema() -> Value {
    json!({
        "type": "object",
        "required": ["recovery_mechanisms"],
        "properties": {
            "recovery_mechanisms": {
                "type": "array",
                "minItems": 1,
                "maxItems": 2,
                "items": {
                    "type": "object",
                    "required": ["name", "priority"],
                    "properties": {
                        "name": token_schema::<RecoveryMechanismName>("Mechanism.", None),
                        "priority": {
                            "type": "integer",
                            "minimum": RECOVERY_PRIORITY.0,
                            "maximum": RECOVERY_PRIORITY.1
                        }
                    },
                    "additionalProperties": false
                }
            }
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Clients and Groups
// ============================================================================

/// Schema for one client entry.
fn client_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": non_empty_string("Client name."),
            "explicit_auth_flows": token_array::<ExplicitAuthFlow>(),
            "prevent_user_existence_errors": token_schema::<PreventUserExistenceErrors>(
                "User-existence error disclosure mode.",
                None
            ),
            "enable_token_revocation": boolean("Allow refresh token revocation.", true),
            "enable_propagate_additional_user_context_data": boolean(
                "Propagate additional user context data.",
                false
            ),
            "generate_secret": boolean("Generate a client secret.", false),
            "access_token_validity": bounded_integer(TOKEN_VALIDITY_HOURS, "Hours."),
            "id_token_validity": bounded_integer(TOKEN_VALIDITY_HOURS, "Hours."),
            "refresh_token_validity": bounded_integer(REFRESH_TOKEN_VALIDITY_DAYS, "Days."),
            "callback_urls": url_array(),
            "logout_urls": url_array(),
            "allowed_oauth_flows": token_array::<OAuthFlow>(),
            "allowed_oauth_scopes": {
                "type": "array",
                "items": { "type": "string", "minLength": 1 },
                "default": []
            },
            "refresh_token_rotation": rotation_schema()
        },
        "additionalProperties": false
    })
}

/// Schema for one group entry.
fn group_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": non_empty_string("Group name; unique across groups."),
            "description": { "type": "string" },
            "precedence": {
                "type": "integer",
                "minimum": 0,
                "maximum": MAX_GROUP_PRECEDENCE
            },
            "role_arn": { "type": "string" }
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema for a closed token vocabulary.
fn token_schema<T: Token>(description: &str, default: Option<&str>) -> Value {
    let mut schema = json!({
        "type": "string",
        "enum": T::tokens(),
        "description": description
    });
    if let (Some(default), Some(object)) = (default, schema.as_object_mut()) {
        object.insert(String::from("default"), Value::from(default));
    }
    schema
}

/// Schema for an array of vocabulary tokens.
fn token_array<T: Token>() -> Value {
    json!({
        "type": "array",
        "items": { "type": "string", "enum": T::tokens() },
        "default": []
    })
}

/// Schema for an array of redirect URLs.
fn url_array() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "string",
            "pattern": "^(https://[^/\\s]\\S*|http://localhost([:/]\\S*)?)$"
        },
        "default": []
    })
}

/// Schema for a non-empty string.
fn non_empty_string(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": description
    })
}

/// Schema for a boolean with a default.
fn boolean(description: &str, default: bool) -> Value {
    json!({
        "type": "boolean",
        "default": default,
        "description": description
    })
}

/// Schema for an integer within `(min, max)`.
fn bounded_integer((min, max): (i64, i64), description: &str) -> Value {
    json!({
        "type": "integer",
        "minimum": min,
        "maximum": max,
        "description": description
    })
}

/// Wraps a schema so that `null` is also accepted.
fn nullable(schema: &Value) -> Value {
    json!({
        "oneOf": [
            { "type": "null" },
            schema
        ]
    })
}
