//! Diagnostics on stderr for failures that stop a scan.
//!
//! Format: `✖ {kind}: {message}` / `  × {detail}` / `  help: {suggestion}`

use std::io::{IsTerminal, Write};

use crate::error::GuardError;

use super::{ColorMode, ansi, is_no_color_set};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        !is_no_color_set() && std::io::stderr().is_terminal()
    }

    /// Print a [`GuardError`] with its cause and hint.
    pub fn print_guard_error(&self, err: &GuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_guard_error(&mut stderr, err);
    }

    pub fn write_guard_error<W: Write>(&self, w: &mut W, err: &GuardError) {
        let detail = err.detail();
        self.write_error(
            w,
            err.error_type(),
            &err.to_string(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Write errors on stderr are discarded: there is nowhere left to report them.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        kind: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {kind}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {kind}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
