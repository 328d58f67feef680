use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dockerfile-guard")]
#[command(author, version, about = "Static analysis for Dockerfiles")]
#[command(long_about = "Scans a Dockerfile line by line against a configurable rule set and \
    reports findings as JSON.\n\n\
    Exit codes:\n  \
    0 - No error findings\n  \
    1 - At least one error finding\n  \
    2 - Rules or Dockerfile could not be loaded")]
pub struct Cli {
    /// Dockerfile to scan
    pub dockerfile: PathBuf,

    /// Rules file (TOML). Skips discovery when given.
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Ignore discovered rules files and use the bundled defaults
    #[arg(long, conflicts_with = "rules")]
    pub no_config: bool,

    /// Output format: json or text
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Control color output (text format and diagnostics)
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the report to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Color mode for the rendered report. `auto` never colors a report
    /// written with `--output`, since the file is not a terminal.
    #[must_use]
    pub fn report_color_mode(&self) -> ColorMode {
        match (self.color, &self.output) {
            (ColorChoice::Auto, Some(_)) => ColorMode::Never,
            (choice, _) => choice.into(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
