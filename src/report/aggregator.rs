use serde::Serialize;

use crate::config::Severity;
use crate::scanner::{ParsedInstruction, RawLine};
use crate::{EXIT_ERRORS_FOUND, EXIT_SUCCESS};

use super::Finding;

/// One severity bucket of findings.
///
/// `count` and `data` are private and only [`Channel::push`] touches them, so
/// the count always equals the number of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
    count: usize,
    data: Vec<Finding>,
}

impl Channel {
    fn push(&mut self, finding: Finding) {
        self.data.push(finding);
        self.count += 1;
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn items(&self) -> &[Finding] {
        &self.data
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Scan-level statistics. Keys are declared in alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub ignored_line_count: usize,
    pub invalid_line_count: usize,
    /// Every line as read, for auditing.
    pub raw_lines: Vec<String>,
    /// Number of valid instruction lines.
    pub resulting_layer_count: usize,
    pub total_line_count: usize,
    pub unrecognized_line_count: usize,
    pub valid_commands: Vec<ParsedInstruction>,
}

/// Finalized result of one scan. Keys are declared in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    errors: Channel,
    info: Channel,
    summary: Summary,
    warnings: Channel,
}

impl Report {
    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub const fn info(&self) -> &Channel {
        &self.info
    }

    #[must_use]
    pub const fn warnings(&self) -> &Channel {
        &self.warnings
    }

    #[must_use]
    pub const fn errors(&self) -> &Channel {
        &self.errors
    }

    #[must_use]
    pub const fn channel(&self, severity: Severity) -> &Channel {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warnings,
            Severity::Error => &self.errors,
        }
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Process exit code: success unless at least one error was recorded.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.has_errors() {
            EXIT_ERRORS_FOUND
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Collects findings and line statistics for a single scan.
///
/// Each scan owns a fresh aggregator; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    summary: Summary,
    info: Channel,
    warnings: Channel,
    errors: Channel,
}

impl ReportAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding into the channel for its severity.
    pub fn record(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Info => self.info.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Error => self.errors.push(finding),
        }
    }

    pub fn record_all(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.record(finding);
        }
    }

    /// Count a line read from the source, whatever its classification.
    pub fn record_raw_line(&mut self, line: &RawLine) {
        self.summary.total_line_count += 1;
        self.summary.raw_lines.push(line.text.clone());
    }

    pub const fn record_ignored(&mut self) {
        self.summary.ignored_line_count += 1;
    }

    pub const fn record_unrecognized(&mut self) {
        self.summary.unrecognized_line_count += 1;
    }

    pub fn record_invalid(&mut self, finding: Finding) {
        self.summary.invalid_line_count += 1;
        self.record(finding);
    }

    /// A valid instruction adds one layer.
    pub fn record_instruction(&mut self, instruction: ParsedInstruction) {
        self.summary.resulting_layer_count += 1;
        self.summary.valid_commands.push(instruction);
    }

    #[must_use]
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub const fn channel(&self, severity: Severity) -> &Channel {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warnings,
            Severity::Error => &self.errors,
        }
    }

    #[must_use]
    pub fn finish(self) -> Report {
        Report {
            errors: self.errors,
            info: self.info,
            summary: self.summary,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
