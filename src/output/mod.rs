mod error_output;
mod json;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::Report;

/// Trait for rendering a finished report.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Per <https://no-color.org>: presence of the variable (any value) disables color.
fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn output_format_rejects_unknown() {
        let err = "sarif".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("sarif"));
    }

    #[test]
    fn output_format_defaults_to_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
