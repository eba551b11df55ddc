// crates/userpool-core/src/runtime/mod.rs
// ============================================================================
// Module: User Pool Plan Runtime
// Description: Conditional composition of resource intents.
// Purpose: Turn a validated configuration into an ordered resource plan.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime holds the composition resolver. It never fails: every
//! configuration reaching it has already passed validation.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod compose;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use compose::IntentBuilder;
pub use compose::compose;
