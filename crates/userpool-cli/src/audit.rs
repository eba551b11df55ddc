// crates/userpool-cli/src/audit.rs
// ============================================================================
// Module: Plan Audit Logging
// Description: Structured audit events for plan runs.
// Purpose: Emit one JSON line per plan run without a global logger.
// Dependencies: serde, serde_json, userpool-core
// ============================================================================

//! ## Overview
//! Each `plan` invocation produces exactly one [`PlanAuditEvent`]: composed,
//! rejected by validation, or failed to load. Events are serialized as JSON
//! lines and routed through a [`PlanAuditSink`] chosen by the caller, so
//! deployments can point them at stderr, an append-only file, or nowhere.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use userpool_core::HashDigest;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result classification for a plan run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Configuration validated and intents were composed.
    Composed,
    /// Configuration parsed but failed validation.
    Rejected,
    /// Configuration could not be read or parsed.
    LoadFailed,
}

/// Plan audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Configuration path when known.
    pub config_path: Option<String>,
    /// Run outcome.
    pub outcome: PlanOutcome,
    /// Number of planned intents (zero unless composed).
    pub intent_count: usize,
    /// Number of violations (zero unless rejected).
    pub violation_count: usize,
    /// Digest of the composed plan.
    pub plan_digest: Option<String>,
}

impl PlanAuditEvent {
    /// Event for a successfully composed plan.
    #[must_use]
    pub fn composed(config_path: &Path, intent_count: usize, digest: &HashDigest) -> Self {
        Self::build(Some(config_path), PlanOutcome::Composed, intent_count, 0, Some(digest))
    }

    /// Event for a configuration rejected by validation.
    #[must_use]
    pub fn rejected(config_path: &Path, violation_count: usize) -> Self {
        Self::build(Some(config_path), PlanOutcome::Rejected, 0, violation_count, None)
    }

    /// Event for a configuration that could not be loaded.
    #[must_use]
    pub fn load_failed(config_path: Option<&Path>) -> Self {
        Self::build(config_path, PlanOutcome::LoadFailed, 0, 0, None)
    }

    /// Stamps an event with the current time.
    fn build(
        config_path: Option<&Path>,
        outcome: PlanOutcome,
        intent_count: usize,
        violation_count: usize,
        digest: Option<&HashDigest>,
    ) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "userpool_plan",
            timestamp_ms,
            config_path: config_path.map(|path| path.display().to_string()),
            outcome,
            intent_count,
            violation_count,
            plan_digest: digest.map(ToString::to_string),
        }
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Destination for plan audit events.
pub trait PlanAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &PlanAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl PlanAuditSink for StderrAuditSink {
    fn record(&self, event: &PlanAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl PlanAuditSink for FileAuditSink {
    fn record(&self, event: &PlanAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl PlanAuditSink for NoopAuditSink {
    fn record(&self, _event: &PlanAuditEvent) {}
}
