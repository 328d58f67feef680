use std::fmt::Write;

use crate::config::Severity;
use crate::error::Result;
use crate::report::{Channel, Finding, Report};

use super::{ColorMode, OutputFormatter, ansi, is_no_color_set};

/// Human-readable report, errors first.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose >= 1`, descriptions and reference URLs are printed too.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    const fn color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_channel(&self, title: &str, severity: Severity, channel: &Channel, out: &mut String) {
        if channel.is_empty() {
            return;
        }
        let heading = format!("{title} ({})", channel.count());
        let _ = writeln!(out, "{}", self.colorize(&heading, Self::color(severity)));
        for finding in channel.items() {
            self.format_finding(finding, out);
        }
        let _ = writeln!(out);
    }

    fn format_finding(&self, finding: &Finding, out: &mut String) {
        let location = finding
            .line_number
            .map_or_else(|| "file".to_string(), |n| format!("line {n}"));
        let _ = writeln!(
            out,
            "  {} {location}: {}",
            Self::icon(finding.severity),
            finding.message
        );

        if self.verbose == 0 {
            return;
        }
        if let Some(description) = &finding.description {
            let _ = writeln!(out, "      {}", self.colorize(description, ansi::DIM));
        }
        if let Some(url) = &finding.reference_url {
            let _ = writeln!(out, "      see: {url}");
        }
    }

    fn format_summary(&self, report: &Report) -> String {
        let summary = report.summary();
        let errors = self.colorize(&report.errors().count().to_string(), ansi::RED);
        let warnings = self.colorize(&report.warnings().count().to_string(), ansi::YELLOW);
        let info = self.colorize(&report.info().count().to_string(), ansi::CYAN);

        let mut line = format!(
            "Summary: {} lines, {} layers, {} ignored",
            summary.total_line_count, summary.resulting_layer_count, summary.ignored_line_count
        );
        if summary.invalid_line_count > 0 {
            let _ = write!(line, ", {} invalid", summary.invalid_line_count);
        }
        if summary.unrecognized_line_count > 0 {
            let _ = write!(line, ", {} unrecognized", summary.unrecognized_line_count);
        }
        let _ = write!(line, " | {errors} errors, {warnings} warnings, {info} info");
        line
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        self.format_channel("ERRORS", Severity::Error, report.errors(), &mut out);
        self.format_channel("WARNINGS", Severity::Warning, report.warnings(), &mut out);
        self.format_channel("INFO", Severity::Info, report.info(), &mut out);

        let summary = self.format_summary(report);
        let _ = writeln!(out, "{}{summary}", if self.use_colors { ansi::BOLD } else { "" });
        if self.use_colors {
            out.push_str(ansi::RESET);
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
