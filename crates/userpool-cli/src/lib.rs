// crates/userpool-cli/src/lib.rs
// ============================================================================
// Module: User Pool Plan CLI Library
// Description: Shared helpers for the userpool-plan command-line interface.
// Purpose: Provide reusable components (i18n, audit, reports) for the binary and tests.
// Dependencies: serde, serde_json, userpool-core
// ============================================================================

//! ## Overview
//! This library houses the pieces of the `userpool-plan` binary that are
//! worth testing on their own: the message catalog behind [`t!`](crate::t), the
//! plan audit sinks, and the plan report renderers. The binary entry point
//! (`src/main.rs`) wires them to the config pipeline.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Structured plan audit events and sinks.
pub mod audit;
/// Internationalization helpers and message catalog.
pub mod i18n;
/// Plan report payloads and renderers.
pub mod report;
