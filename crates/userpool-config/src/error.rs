// crates/userpool-config/src/error.rs
// ============================================================================
// Module: Validation Errors
// Description: Violation taxonomy, accumulator, and pipeline error types.
// Purpose: Report every independent configuration problem with its field path.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Validation never stops at the first problem. The normalizer and validators
//! share one [`Violations`] accumulator, each recording at most one violation
//! per field path. The accumulated list becomes a [`ValidationError`] whose
//! display names every offending path and rule.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Violations
// ============================================================================

/// Category of a configuration violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Structurally wrong shape (object expected, unknown key, bad domain shape).
    MalformedInput,
    /// Scalar present with the wrong primitive type.
    TypeMismatch,
    /// Correctly typed value outside the allowed vocabulary or range.
    DomainConstraint,
    /// Required field absent.
    MissingRequiredField,
}

impl ViolationKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed_input",
            Self::TypeMismatch => "type_mismatch",
            Self::DomainConstraint => "domain_constraint",
            Self::MissingRequiredField => "missing_required_field",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single violated rule at a field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Dotted field path (`$` for the document root).
    pub path: String,
    /// Human-readable rule that was violated.
    pub rule: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.rule, self.kind)
    }
}

// ============================================================================
// SECTION: Accumulator
// ============================================================================

/// Ordered collection of violations gathered during one validation pass.
#[derive(Debug, Default)]
pub struct Violations {
    /// Violations in discovery order.
    items: Vec<Violation>,
}

impl Violations {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
        }
    }

    /// Records a violation.
    pub fn push(&mut self, kind: ViolationKind, path: impl Into<String>, rule: impl Into<String>) {
        self.items.push(Violation {
            kind,
            path: path.into(),
            rule: rule.into(),
        });
    }

    /// Records a structural violation.
    pub fn malformed(&mut self, path: impl Into<String>, rule: impl Into<String>) {
        self.push(ViolationKind::MalformedInput, path, rule);
    }

    /// Records a primitive type violation.
    pub fn type_mismatch(&mut self, path: impl Into<String>, rule: impl Into<String>) {
        self.push(ViolationKind::TypeMismatch, path, rule);
    }

    /// Records a vocabulary or range violation.
    pub fn constraint(&mut self, path: impl Into<String>, rule: impl Into<String>) {
        self.push(ViolationKind::DomainConstraint, path, rule);
    }

    /// Records an absent required field.
    pub fn missing(&mut self, path: impl Into<String>) {
        self.push(ViolationKind::MissingRequiredField, path, "required field is missing");
    }

    /// Records the reason of a failed primitive check as a domain constraint.
    pub fn check<T>(&mut self, path: &str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(rule) => {
                self.constraint(path, rule);
                None
            }
        }
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `value` when clean, otherwise every recorded violation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when at least one violation was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.items.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                violations: self.items,
            })
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Every violation found in one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}", render_violations(.violations))]
pub struct ValidationError {
    /// Violations in discovery order; never empty.
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns the violations in discovery order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Finds the first violation recorded at `path`.
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|violation| violation.path == path)
    }

    /// Returns true when any violation is recorded at `path`.
    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        self.at(path).is_some()
    }
}

/// Renders the violation count followed by each violation.
fn render_violations(violations: &[Violation]) -> String {
    let mut out = format!("{} configuration violation(s)", violations.len());
    for violation in violations {
        out.push_str("; ");
        out.push_str(&violation.to_string());
    }
    out
}

/// Errors raised while loading and planning a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// File exceeded a size, encoding, or path limit.
    #[error("config rejected: {0}")]
    Limit(String),
    /// TOML or JSON parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Configuration parsed but failed validation.
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationError),
}
