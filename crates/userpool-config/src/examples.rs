// crates/userpool-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic starting point for `config example`.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for user pool configuration. It exercises every block
//! and is kept valid against both the schema and the validators by tests.

/// Returns a canonical example `userpool.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"user_pool_name = "example-pool"
enabled = true
ignore_schema_changes = false
user_pool_tier = "ESSENTIALS"
mfa_configuration = "OPTIONAL"
deletion_protection = "ACTIVE"
auto_verified_attributes = ["email"]
username_attributes = ["email"]
advanced_security_additional_flows = "AUDIT"
domain = "example-auth"

[password_policy]
minimum_length = 12
require_lowercase = true
require_numbers = true
require_symbols = true
require_uppercase = true
temporary_password_validity_days = 7

[refresh_token_rotation]
type = "rotate"
retry_grace_period_seconds = 60

[user_pool_add_ons]
advanced_security_mode = "AUDIT"

[software_token_mfa_configuration]
enabled = true

[device_configuration]
challenge_required_on_new_device = true
device_only_remembered_on_user_prompt = true

[account_recovery_setting]
[[account_recovery_setting.recovery_mechanisms]]
name = "verified_email"
priority = 1

[[account_recovery_setting.recovery_mechanisms]]
name = "verified_phone_number"
priority = 2

[clients.web]
name = "web-app"
explicit_auth_flows = ["ALLOW_USER_SRP_AUTH", "ALLOW_REFRESH_TOKEN_AUTH"]
prevent_user_existence_errors = "ENABLED"
generate_secret = false
access_token_validity = 1
id_token_validity = 1
refresh_token_validity = 30
callback_urls = ["https://app.example.com/callback", "http://localhost:3000/callback"]
logout_urls = ["https://app.example.com/logout"]
allowed_oauth_flows = ["code"]
allowed_oauth_scopes = ["openid", "email", "profile"]

[clients.backend]
name = "backend-service"
explicit_auth_flows = ["ALLOW_REFRESH_TOKEN_AUTH"]
generate_secret = true

[clients.backend.refresh_token_rotation]
type = "disabled"

[[user_groups]]
name = "admins"
description = "Administrators"
precedence = 1

[[user_groups]]
name = "users"
description = "Regular users"
precedence = 10

[tags]
environment = "example"
"#,
    )
}
