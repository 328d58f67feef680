use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Rules document (as written on disk)
// ============================================================================

/// Severity attached to a rule and to every finding it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a global count rule compares the observed count with `expected_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountComparison {
    /// Fires when the observed count differs from the expected count.
    #[default]
    Exact,
    /// Fires when the observed count is below the expected count.
    AtLeast,
    /// Fires when the observed count is above the expected count.
    AtMost,
}

impl CountComparison {
    /// Returns true when `observed` violates the constraint.
    #[must_use]
    pub const fn is_violated(self, observed: usize, expected: usize) -> bool {
        match self {
            Self::Exact => observed != expected,
            Self::AtLeast => observed < expected,
            Self::AtMost => observed > expected,
        }
    }
}

/// Root of a rules file.
///
/// Required keys inside `general` are optional here so that a missing key is
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesDocument {
    pub general: Option<GeneralSection>,

    /// Per-instruction rules `[[line_rules.RUN]]`, in file order.
    #[serde(default)]
    pub line_rules: IndexMap<String, Vec<RuleSpec>>,

    /// Whole-file constraints `[[global_counts]]`.
    #[serde(default)]
    pub global_counts: Vec<GlobalCountSpec>,
}

/// `[general]` settings shared by every line of the scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneralSection {
    /// Lines matching this pattern are skipped (blank lines, comments).
    pub ignore_regex: Option<String>,

    /// Instruction grammar. Group 1 is the instruction token, group 2 (if any)
    /// the argument text.
    pub instruction_regex: Option<String>,

    /// Instruction vocabulary. Matched case-insensitively.
    pub valid_instructions: Option<Vec<String>>,
}

/// A single per-instruction rule `[[line_rules.<INSTRUCTION>]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub regex: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference_url: Option<String>,
}

/// A whole-file instruction count constraint `[[global_counts]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobalCountSpec {
    pub instruction: String,
    pub expected_count: usize,
    #[serde(default)]
    pub comparison: CountComparison,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference_url: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
