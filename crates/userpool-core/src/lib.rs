// crates/userpool-core/src/lib.rs
// ============================================================================
// Module: User Pool Plan Core Library
// Description: Public API surface for the user pool plan core.
// Purpose: Expose the canonical model, resource intents, and the resolver.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! User pool plan core turns a validated user pool configuration into an
//! ordered list of resource intents. It is pure and deterministic: no I/O,
//! no shared state, and identical input always yields an identical plan.
//!
//! Raw input handling (normalization and validation) lives in
//! `userpool-config`; this crate only accepts the canonical typed model.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use runtime::IntentBuilder;
pub use runtime::compose;
