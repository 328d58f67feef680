use crate::config::RuleSet;

use super::types::{LineOutcome, ParsedInstruction, RawLine};

/// Tags raw lines using the rule set's precompiled global patterns.
///
/// The ignore pattern is checked first, then the instruction grammar. The
/// grammar match is case-sensitive; the vocabulary lookup is not.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    rules: &'a RuleSet,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn classify(&self, line: &RawLine) -> LineOutcome {
        if self.rules.ignore_pattern().is_match(&line.text) {
            return LineOutcome::Ignored;
        }

        let Some(captures) = self.rules.instruction_pattern().captures(&line.text) else {
            return LineOutcome::Unrecognized;
        };
        // Group 1 may be optional in a custom grammar.
        let Some(token) = captures.get(1) else {
            return LineOutcome::Unrecognized;
        };
        let argument = captures
            .get(2)
            .map_or_else(String::new, |m| m.as_str().to_string());

        let instruction = token.as_str().to_uppercase();
        if self.rules.valid_instructions().contains(&instruction) {
            LineOutcome::Instruction(ParsedInstruction {
                argument,
                instruction,
                line_number: line.number,
            })
        } else {
            LineOutcome::InvalidInstruction {
                token: token.as_str().to_string(),
                argument,
            }
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
