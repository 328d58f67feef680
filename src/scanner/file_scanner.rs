use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, info, trace};

use crate::config::{RuleSet, Severity};
use crate::error::{GuardError, Result};
use crate::report::{Channel, Finding, Report, ReportAggregator};

use super::classifier::LineClassifier;
use super::matcher::match_rules;
use super::types::{LineOutcome, RawLine};

/// Single-pass Dockerfile scanner.
///
/// A live scanner is in the scanning phase: lines are fed in order with
/// [`FileScanner::feed_line`]. [`FileScanner::finish`] consumes it, runs the
/// whole-file count rules, and hands back the finalized [`Report`]. No line
/// can be fed once post-processing has started, and a report cannot be
/// mutated.
#[derive(Debug)]
pub struct FileScanner<'a> {
    rules: &'a RuleSet,
    classifier: LineClassifier<'a>,
    aggregator: ReportAggregator,
    instruction_counts: IndexMap<String, usize>,
    lines_seen: usize,
}

impl<'a> FileScanner<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            classifier: LineClassifier::new(rules),
            aggregator: ReportAggregator::new(),
            instruction_counts: IndexMap::new(),
            lines_seen: 0,
        }
    }

    /// Scan an in-memory Dockerfile.
    #[must_use]
    pub fn scan_str(rules: &'a RuleSet, source: &str) -> Report {
        let mut scanner = Self::new(rules);
        for line in source.lines() {
            scanner.feed_line(line);
        }
        scanner.finish()
    }

    /// Scan a Dockerfile from a buffered reader.
    ///
    /// # Errors
    /// Returns an I/O error if reading fails (including invalid UTF-8).
    pub fn scan_reader<R: BufRead>(rules: &'a RuleSet, reader: R) -> std::io::Result<Report> {
        let mut scanner = Self::new(rules);
        for line in reader.lines() {
            scanner.feed_line(&line?);
        }
        Ok(scanner.finish())
    }

    /// Open, scan and close a Dockerfile on disk.
    ///
    /// # Errors
    /// Returns [`GuardError::SourceNotFound`] if the file is missing or unreadable.
    pub fn scan_path(rules: &'a RuleSet, path: &Path) -> Result<Report> {
        let to_error = |source: std::io::Error| GuardError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(to_error)?;
        debug!("Scanning {}", path.display());
        Self::scan_reader(rules, BufReader::new(file)).map_err(to_error)
    }

    /// Findings recorded so far for one severity.
    #[must_use]
    pub const fn channel(&self, severity: Severity) -> &Channel {
        self.aggregator.channel(severity)
    }

    /// Observed count of a valid instruction so far.
    #[must_use]
    pub fn instruction_count(&self, instruction: &str) -> usize {
        self.instruction_counts
            .get(instruction.to_uppercase().as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Classify one line and record its findings.
    pub fn feed_line(&mut self, text: &str) {
        self.lines_seen += 1;
        let line = RawLine::new(self.lines_seen, text);
        self.aggregator.record_raw_line(&line);

        let outcome = self.classifier.classify(&line);
        trace!("line {}: {outcome:?}", line.number);

        match outcome {
            LineOutcome::Ignored => self.aggregator.record_ignored(),
            LineOutcome::Unrecognized => self.aggregator.record_unrecognized(),
            LineOutcome::InvalidInstruction { token, .. } => {
                self.aggregator
                    .record_invalid(Finding::invalid_instruction(line.number, &token));
            }
            LineOutcome::Instruction(parsed) => {
                let findings = match_rules(
                    self.rules.rules_for(&parsed.instruction),
                    &parsed.argument,
                    parsed.line_number,
                );
                self.aggregator.record_all(findings);
                *self
                    .instruction_counts
                    .entry(parsed.instruction.clone())
                    .or_insert(0) += 1;
                self.aggregator.record_instruction(parsed);
            }
        }
    }

    /// Run whole-file checks and produce the final report.
    #[must_use]
    pub fn finish(mut self) -> Report {
        debug!("Post-processing after {} lines", self.lines_seen);
        self.apply_global_counts();

        let report = self.aggregator.finish();
        info!(
            "Scanned {} lines: {} layers, {} info, {} warnings, {} errors",
            report.summary().total_line_count,
            report.summary().resulting_layer_count,
            report.info().count(),
            report.warnings().count(),
            report.errors().count()
        );
        report
    }

    fn apply_global_counts(&mut self) {
        let rules = self.rules;
        for rule in rules.global_count_rules() {
            let observed = self
                .instruction_counts
                .get(&rule.instruction)
                .copied()
                .unwrap_or(0);
            if rule.comparison.is_violated(observed, rule.expected_count) {
                debug!(
                    "Global count rule for {} violated: observed {observed}, expected {}",
                    rule.instruction, rule.expected_count
                );
                self.aggregator.record(Finding::from_global_count(rule, observed));
            }
        }
    }
}

#[cfg(test)]
#[path = "file_scanner_tests.rs"]
mod tests;
