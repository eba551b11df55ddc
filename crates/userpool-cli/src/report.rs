// crates/userpool-cli/src/report.rs
// ============================================================================
// Module: Plan Reports
// Description: Output payloads and renderers for the `plan` command.
// Purpose: Present composed intents as canonical JSON or a Markdown summary.
// Dependencies: serde, userpool-core
// ============================================================================

//! ## Overview
//! A [`PlanReport`] bundles a composition result with its source path and
//! digest. JSON output is the canonical serialization of the report; the
//! Markdown view lists intent addresses in emission order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;
use std::path::Path;

use serde::Serialize;
use userpool_core::CompositionResult;
use userpool_core::HashDigest;
use userpool_core::HashError;
use userpool_core::ResourceIntent;

use crate::t;

// ============================================================================
// SECTION: Report
// ============================================================================

/// Serializable view of one plan run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport<'a> {
    /// Configuration path the plan was built from.
    pub config_path: String,
    /// Digest of the canonical composition result.
    pub plan_digest: HashDigest,
    /// Number of intents.
    pub intent_count: usize,
    /// Intents in emission order.
    pub intents: &'a [ResourceIntent],
}

impl<'a> PlanReport<'a> {
    /// Builds a report, hashing the plan.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the plan cannot be canonicalized.
    pub fn new(config_path: &Path, plan: &'a CompositionResult) -> Result<Self, HashError> {
        Ok(Self {
            config_path: config_path.display().to_string(),
            plan_digest: plan.digest()?,
            intent_count: plan.len(),
            intents: plan.intents(),
        })
    }

    /// Renders a Markdown summary in the current locale.
    #[must_use]
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", t!("plan.markdown.title"));
        out.push('\n');
        let _ = writeln!(out, "{}", t!("plan.markdown.source", path = self.config_path));
        let _ = writeln!(out, "{}", t!("plan.markdown.digest", digest = self.plan_digest));
        out.push('\n');
        if self.intents.is_empty() {
            let _ = writeln!(out, "{}", t!("plan.markdown.empty"));
            return out;
        }
        let _ = writeln!(out, "{}", t!("plan.markdown.count", count = self.intent_count));
        out.push('\n');
        let _ = writeln!(out, "{}", t!("plan.markdown.header"));
        out.push_str("|---|---|---|\n");
        for (index, intent) in self.intents.iter().enumerate() {
            let _ = writeln!(
                out,
                "| {} | `{}` | {} |",
                index + 1,
                intent.address(),
                intent.kind().as_str()
            );
        }
        out
    }
}
