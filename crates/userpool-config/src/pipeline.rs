// crates/userpool-config/src/pipeline.rs
// ============================================================================
// Module: Planning Pipeline
// Description: Normalize, validate, then compose.
// Purpose: Provide the single entry point from raw input to a resource plan.
// Dependencies: serde_json, userpool-core
// ============================================================================

//! ## Overview
//! Raw input flows through the normalizer and validators with one shared
//! accumulator. Composition only runs once the accumulator is empty, so an
//! invalid configuration never reaches the resolver and no plan is ever
//! partially built.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use userpool_core::CompositionResult;
use userpool_core::UserPoolConfig;
use userpool_core::compose;

use crate::error::ValidationError;
use crate::error::Violations;
use crate::normalize::Normalizer;
use crate::validate::validate_config;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Normalizes and validates raw input into the canonical model.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violation found.
pub fn validate(raw: &Value) -> Result<UserPoolConfig, ValidationError> {
    let mut violations = Violations::new();
    let normalized = Normalizer::new(&mut violations).normalize(raw);
    let config = validate_config(&normalized, &mut violations);
    violations.finish(config)
}

/// Validates raw input and composes its resource plan.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every violation found.
pub fn plan(raw: &Value) -> Result<CompositionResult, ValidationError> {
    let config = validate(raw)?;
    Ok(compose(&config))
}
