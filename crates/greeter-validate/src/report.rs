//! Validation outcomes: violations and the ordered report.

use serde::{Deserialize, Serialize};

/// A single constraint failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Hierarchical path of the offending field, e.g. `name`,
    /// `profile.locale`, `names[2]`.
    pub field: String,
    /// Human-readable reason the constraint failed.
    pub reason: String,
}

impl Violation {
    /// Create a violation for a field path.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Result of validating one message: either valid (empty) or an ordered
/// list of violations, one per failed constraint, in field declaration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// An empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no constraint failed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The collected violations, in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Consume the report, yielding its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Render all violations as `field: reason` pairs joined by `; `.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.write_str("valid")
        } else {
            f.write_str(&self.summary())
        }
    }
}
