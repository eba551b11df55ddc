// crates/userpool-core/src/core/vocabulary.rs
// ============================================================================
// Module: User Pool Vocabularies
// Description: Closed, case-sensitive token sets used by user pool settings.
// Purpose: Give every enumerated setting one canonical token spelling.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every enumerated user pool setting is a closed vocabulary of exact,
//! case-sensitive tokens. The [`Token`] trait exposes the legal set so that
//! primitive validators, schema generation, and serialization all agree on the
//! same spelling.
//!
//! ## Invariants
//! - `as_str` and the serde representation are identical for every variant.
//! - Matching is exact: `"lite"` is not `"LITE"`, and `""` matches nothing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Token Trait
// ============================================================================

/// A closed vocabulary of case-sensitive string tokens.
pub trait Token: Copy + Sized + 'static {
    /// Every legal variant, in declaration order.
    const ALL: &'static [Self];

    /// Returns the canonical token for the variant.
    fn as_str(self) -> &'static str;

    /// Resolves an exact token match.
    #[must_use]
    fn from_token(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.as_str() == value)
    }

    /// Returns the legal tokens in declaration order.
    #[must_use]
    fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|variant| variant.as_str()).collect()
    }
}

/// Declares a closed token enum with matching serde and [`Token`] spellings.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl Token for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============================================================================
// SECTION: Pool Settings
// ============================================================================

token_enum! {
    /// Service-level tier of the user pool.
    #[derive(Default)]
    Tier {
        /// Lite feature plan.
        Lite => "LITE",
        /// Essentials feature plan.
        #[default]
        Essentials => "ESSENTIALS",
        /// Plus feature plan.
        Plus => "PLUS",
    }
}

token_enum! {
    /// Multi-factor authentication enforcement mode.
    #[derive(Default)]
    MfaConfiguration {
        /// MFA disabled.
        #[default]
        Off => "OFF",
        /// MFA available but not required.
        Optional => "OPTIONAL",
        /// MFA required for every user.
        On => "ON",
    }
}

token_enum! {
    /// Risk-based adaptive authentication mode for the pool add-ons.
    AdvancedSecurityMode {
        /// Adaptive authentication disabled.
        Off => "OFF",
        /// Risks are recorded but not acted upon.
        Audit => "AUDIT",
        /// Risks are recorded and acted upon.
        Enforced => "ENFORCED",
    }
}

token_enum! {
    /// Advanced security mode applied to custom and additional auth flows.
    AdditionalFlowsMode {
        /// Risks are recorded but not acted upon.
        Audit => "AUDIT",
        /// Risks are recorded and acted upon.
        Enforced => "ENFORCED",
    }
}

token_enum! {
    /// Standard attributes usable for sign-in and automatic verification.
    UserAttribute {
        /// Email address.
        Email => "email",
        /// Phone number.
        PhoneNumber => "phone_number",
    }
}

token_enum! {
    /// Protection against deleting an active user pool.
    #[derive(Default)]
    DeletionProtection {
        /// Deletion is blocked.
        Active => "ACTIVE",
        /// Deletion is allowed.
        #[default]
        Inactive => "INACTIVE",
    }
}

token_enum! {
    /// Account recovery mechanism names.
    RecoveryMechanismName {
        /// Recovery through a verified email address.
        VerifiedEmail => "verified_email",
        /// Recovery through a verified phone number.
        VerifiedPhoneNumber => "verified_phone_number",
        /// Recovery only through an administrator.
        AdminOnly => "admin_only",
    }
}

// ============================================================================
// SECTION: Client Settings
// ============================================================================

token_enum! {
    /// Refresh token rotation behavior.
    RotationType {
        /// Issue a new refresh token on every refresh.
        Rotate => "rotate",
        /// Keep the original refresh token.
        Disabled => "disabled",
    }
}

token_enum! {
    /// Authentication flows a client may be allowed to use.
    ExplicitAuthFlow {
        /// Legacy server-side admin auth without SRP.
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        /// Legacy custom-auth-only flow.
        CustomAuthFlowOnly => "CUSTOM_AUTH_FLOW_ONLY",
        /// Legacy username/password flow.
        UserPasswordAuth => "USER_PASSWORD_AUTH",
        /// Server-side admin username/password flow.
        AllowAdminUserPasswordAuth => "ALLOW_ADMIN_USER_PASSWORD_AUTH",
        /// Lambda-driven custom authentication.
        AllowCustomAuth => "ALLOW_CUSTOM_AUTH",
        /// Username/password flow.
        AllowUserPasswordAuth => "ALLOW_USER_PASSWORD_AUTH",
        /// Secure remote password flow.
        AllowUserSrpAuth => "ALLOW_USER_SRP_AUTH",
        /// Refresh token flow.
        AllowRefreshTokenAuth => "ALLOW_REFRESH_TOKEN_AUTH",
        /// Choice-based user authentication flow.
        AllowUserAuth => "ALLOW_USER_AUTH",
    }
}

token_enum! {
    /// User-existence error disclosure mode.
    PreventUserExistenceErrors {
        /// Generic errors that do not reveal user existence.
        Enabled => "ENABLED",
        /// Legacy errors that may reveal user existence.
        Legacy => "LEGACY",
    }
}

token_enum! {
    /// OAuth 2.0 grant types a client may use.
    OAuthFlow {
        /// Authorization code grant.
        Code => "code",
        /// Implicit grant.
        Implicit => "implicit",
        /// Client credentials grant.
        ClientCredentials => "client_credentials",
    }
}
