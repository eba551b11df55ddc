// crates/userpool-config/src/lib.rs
// ============================================================================
// Module: User Pool Plan Config Library
// Description: Raw configuration loading, normalization, and validation.
// Purpose: Single source of truth for what a valid user pool configuration is.
// Dependencies: userpool-core, serde_json, toml
// ============================================================================

//! ## Overview
//! `userpool-config` accepts loosely typed configuration (TOML or JSON),
//! normalizes it into one canonical shape, validates every field against
//! its vocabulary, range, and cross-field rules, and hands the resulting
//! typed model to the core resolver. Violations are batched: one pass
//! reports every independent problem with its field path.
//!
//! It also publishes the input JSON schema and a canonical example config.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod examples;
pub mod load;
pub mod normalize;
pub mod pipeline;
pub mod primitive;
pub mod schema;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ConfigError;
pub use error::ValidationError;
pub use error::Violation;
pub use error::ViolationKind;
pub use error::Violations;
pub use examples::config_toml_example;
pub use load::RawConfig;
pub use load::RawFormat;
pub use load::parse_document;
pub use normalize::NormalizedConfig;
pub use normalize::Normalizer;
pub use pipeline::plan;
pub use pipeline::validate;
pub use schema::config_schema;
