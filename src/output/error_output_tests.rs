use std::io;
use std::path::PathBuf;

use super::*;

fn write(out: &ErrorOutput, err: &GuardError) -> String {
    let mut buf = Vec::new();
    out.write_guard_error(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn plain_error_line() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(&mut buf, "Config", "bad rules", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Config: bad rules\n");
}

#[test]
fn detail_and_suggestion_lines() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(
        &mut buf,
        "Pattern",
        "invalid regex",
        Some("unclosed group"),
        Some("Fix the regex"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "✖ Pattern: invalid regex\n  × unclosed group\n  help: Fix the regex\n"
    );
}

#[test]
fn colored_output_wraps_heading() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_error(&mut buf, "IO", "boom", None, Some("retry"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.starts_with(&format!("{}{}✖ IO:{}", ansi::BOLD, ansi::RED, ansi::RESET)));
    assert!(result.contains(&format!("{}help:{}", ansi::CYAN, ansi::RESET)));
}

#[test]
fn guard_error_missing_rules_file() {
    let err = GuardError::RulesRead {
        path: PathBuf::from("missing.toml"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
    };
    let result = write(&ErrorOutput::with_colors(false), &err);

    assert!(result.starts_with("✖ Config: Failed to read rules file: missing.toml\n"));
    assert!(result.contains("  × No such file\n"));
    assert!(result.contains("  help: Check the --rules path"));
}

#[test]
fn guard_error_without_detail_or_hint() {
    let err = GuardError::Io(io::Error::other("disk full"));
    let result = write(&ErrorOutput::with_colors(false), &err);
    assert_eq!(result, "✖ IO: IO error: disk full\n");
}

#[test]
fn never_mode_disables_colors() {
    let err = GuardError::Config("empty vocabulary".into());
    let result = write(&ErrorOutput::new(ColorMode::Never), &err);
    assert!(!result.contains('\x1b'));
}
