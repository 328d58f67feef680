use serde::Serialize;

use crate::config::{CountComparison, GlobalCountRule, Rule, Severity};

/// Message recorded for a line whose instruction is not in the vocabulary.
pub const INVALID_INSTRUCTION_MESSAGE: &str = "invalid instruction";

/// A single classified observation about one line or about the whole file.
///
/// Fields are declared in alphabetical order so the serialized form has
/// sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub description: Option<String>,
    /// `None` for whole-file findings.
    pub line_number: Option<usize>,
    pub message: String,
    pub reference_url: Option<String>,
    pub severity: Severity,
}

impl Finding {
    /// Finding produced by a line rule that matched.
    #[must_use]
    pub fn from_rule(rule: &Rule, line_number: usize) -> Self {
        Self {
            description: rule.description.clone(),
            line_number: Some(line_number),
            message: rule.message.clone(),
            reference_url: rule.reference_url.clone(),
            severity: rule.severity,
        }
    }

    /// Finding produced by a violated global count rule.
    ///
    /// Without a configured description, the observed count is described.
    #[must_use]
    pub fn from_global_count(rule: &GlobalCountRule, observed: usize) -> Self {
        let description = rule.description.clone().unwrap_or_else(|| {
            let bound = match rule.comparison {
                CountComparison::Exact => "exactly",
                CountComparison::AtLeast => "at least",
                CountComparison::AtMost => "at most",
            };
            format!(
                "Found {observed} {} instruction(s), expected {bound} {}",
                rule.instruction, rule.expected_count
            )
        });
        Self {
            description: Some(description),
            line_number: None,
            message: rule.message.clone(),
            reference_url: rule.reference_url.clone(),
            severity: rule.severity,
        }
    }

    /// Error finding for a line whose token is not a known instruction.
    #[must_use]
    pub fn invalid_instruction(line_number: usize, token: &str) -> Self {
        Self {
            description: Some(format!("'{token}' is not a recognized instruction")),
            line_number: Some(line_number),
            message: INVALID_INSTRUCTION_MESSAGE.to_string(),
            reference_url: None,
            severity: Severity::Error,
        }
    }
}
