use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read rules file: {path}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed rules file {path}: {source}")]
    RulesParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid regex in {context}: {pattern}")]
    InvalidPattern {
        context: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Dockerfile not found or unreadable: {path}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GuardError {
    /// True for every failure that stems from the rules configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::RulesRead { .. }
                | Self::RulesParse { .. }
                | Self::InvalidPattern { .. }
        )
    }

    /// Short label used as the heading of a diagnostic.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::RulesRead { .. } | Self::RulesParse { .. } => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::SourceNotFound { .. } => "SourceNotFound",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Detail line shown under the heading, taken from the underlying cause.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::RulesRead { source, .. } | Self::SourceNotFound { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RulesRead { .. } => {
                Some("Check the --rules path, or omit it to use the bundled default rules")
            }
            Self::RulesParse { .. } | Self::Config(_) => Some(
                "Rules files need [general] with ignore_regex, instruction_regex and valid_instructions",
            ),
            Self::InvalidPattern { .. } => Some("Fix the regex syntax in the rules file"),
            Self::SourceNotFound { .. } => Some("Pass the path of an existing Dockerfile"),
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
