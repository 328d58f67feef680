//! Compiled, read-only rule set.
//!
//! Every pattern in a [`RulesDocument`] is compiled exactly once here. An
//! invalid pattern is a configuration error at load time, so matching lines
//! later can never fail.

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::error::{GuardError, Result};

use super::model::{
    CountComparison, GeneralSection, GlobalCountSpec, RuleSpec, RulesDocument, Severity,
};

/// Per-instruction rule with its precompiled pattern.
#[derive(Debug, Clone)]
pub struct Rule {
    pub regex: Regex,
    pub severity: Severity,
    pub message: String,
    pub description: Option<String>,
    pub reference_url: Option<String>,
}

/// Whole-file instruction count constraint, checked after scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalCountRule {
    /// Upper-cased instruction name.
    pub instruction: String,
    pub expected_count: usize,
    pub comparison: CountComparison,
    pub severity: Severity,
    pub message: String,
    pub description: Option<String>,
    pub reference_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    ignore: Regex,
    instruction: Regex,
    valid_instructions: BTreeSet<String>,
    line_rules: IndexMap<String, Vec<Rule>>,
    global_counts: Vec<GlobalCountRule>,
}

impl RuleSet {
    /// Parse and compile a TOML rules document.
    ///
    /// `origin` is only used for error reporting.
    ///
    /// # Errors
    /// Returns an error if the document is malformed, misses a required key, or
    /// contains an invalid pattern.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let document: RulesDocument =
            toml::from_str(content).map_err(|source| GuardError::RulesParse {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::from_document(document)
    }

    /// Compile an already-deserialized rules document.
    ///
    /// # Errors
    /// Returns an error if a required `general` key is missing, the vocabulary
    /// is empty, a rule targets an unknown instruction, or a pattern is invalid.
    pub fn from_document(document: RulesDocument) -> Result<Self> {
        let general = document.general.unwrap_or_default();
        let (ignore, instruction, valid_instructions) = compile_general(general)?;

        let mut line_rules: IndexMap<String, Vec<Rule>> = IndexMap::new();
        for (name, specs) in document.line_rules {
            let key = normalize_instruction(&name);
            ensure_known(&valid_instructions, &key, "line_rules")?;
            let compiled = specs
                .into_iter()
                .enumerate()
                .map(|(idx, spec)| compile_rule(spec, &format!("line_rules.{key}[{idx}]")))
                .collect::<Result<Vec<_>>>()?;
            line_rules.entry(key).or_default().extend(compiled);
        }

        let global_counts = document
            .global_counts
            .into_iter()
            .map(|spec| compile_global_count(spec, &valid_instructions))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Compiled rule set: {} instructions, {} line rules, {} global count rules",
            valid_instructions.len(),
            line_rules.values().map(Vec::len).sum::<usize>(),
            global_counts.len()
        );

        Ok(Self {
            ignore,
            instruction,
            valid_instructions,
            line_rules,
            global_counts,
        })
    }

    #[must_use]
    pub const fn ignore_pattern(&self) -> &Regex {
        &self.ignore
    }

    #[must_use]
    pub const fn instruction_pattern(&self) -> &Regex {
        &self.instruction
    }

    /// Upper-cased instruction vocabulary.
    #[must_use]
    pub const fn valid_instructions(&self) -> &BTreeSet<String> {
        &self.valid_instructions
    }

    /// Case-insensitive vocabulary lookup.
    #[must_use]
    pub fn is_valid_instruction(&self, token: &str) -> bool {
        self.valid_instructions.contains(&token.to_uppercase())
    }

    /// Rules for one instruction in declaration order; empty if none apply.
    #[must_use]
    pub fn rules_for(&self, instruction: &str) -> &[Rule] {
        self.line_rules
            .get(instruction.to_uppercase().as_str())
            .map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn global_count_rules(&self) -> &[GlobalCountRule] {
        &self.global_counts
    }
}

fn compile_general(general: GeneralSection) -> Result<(Regex, Regex, BTreeSet<String>)> {
    let ignore_src = require(general.ignore_regex, "general.ignore_regex")?;
    let instruction_src = require(general.instruction_regex, "general.instruction_regex")?;
    let vocabulary = require(general.valid_instructions, "general.valid_instructions")?;

    let ignore = compile_pattern(&ignore_src, "general.ignore_regex")?;
    let instruction = compile_pattern(&instruction_src, "general.instruction_regex")?;

    // captures_len counts the implicit whole-match group.
    if instruction.captures_len() < 2 {
        return Err(GuardError::Config(format!(
            "general.instruction_regex must capture the instruction token in group 1: {instruction_src}"
        )));
    }

    let valid_instructions: BTreeSet<String> = vocabulary
        .iter()
        .map(String::as_str)
        .map(normalize_instruction)
        .filter(|name| !name.is_empty())
        .collect();
    if valid_instructions.is_empty() {
        return Err(GuardError::Config(
            "general.valid_instructions must not be empty".to_string(),
        ));
    }

    Ok((ignore, instruction, valid_instructions))
}

fn require<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| GuardError::Config(format!("missing required key {key}")))
}

fn ensure_known(vocabulary: &BTreeSet<String>, instruction: &str, section: &str) -> Result<()> {
    if vocabulary.contains(instruction) {
        Ok(())
    } else {
        Err(GuardError::Config(format!(
            "{section} refers to '{instruction}', which is not in general.valid_instructions"
        )))
    }
}

fn compile_pattern(pattern: &str, context: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| GuardError::InvalidPattern {
        context: context.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Vocabulary entries, `line_rules` keys and `global_counts` instructions all
/// compare in this form.
fn normalize_instruction(name: &str) -> String {
    name.trim().to_uppercase()
}

fn compile_rule(spec: RuleSpec, context: &str) -> Result<Rule> {
    Ok(Rule {
        regex: compile_pattern(&spec.regex, context)?,
        severity: spec.severity,
        message: spec.message,
        description: spec.description,
        reference_url: spec.reference_url,
    })
}

fn compile_global_count(
    spec: GlobalCountSpec,
    vocabulary: &BTreeSet<String>,
) -> Result<GlobalCountRule> {
    let instruction = normalize_instruction(&spec.instruction);
    ensure_known(vocabulary, &instruction, "global_counts")?;
    Ok(GlobalCountRule {
        instruction,
        expected_count: spec.expected_count,
        comparison: spec.comparison,
        severity: spec.severity,
        message: spec.message,
        description: spec.description,
        reference_url: spec.reference_url,
    })
}

#[cfg(test)]
#[path = "rule_set_tests.rs"]
mod tests;
