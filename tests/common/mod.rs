#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dockerfile-guard binary.
#[macro_export]
macro_rules! dockerfile_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dockerfile-guard"))
    };
}

/// Passes every bundled check; only the floating-tag and exposed-port
/// info findings are reported.
pub const TAGGED_DOCKERFILE: &str = "\
# build image
FROM ubuntu:latest
MAINTAINER dev@example.com
USER app
EXPOSE 8080
";

pub const MINIMAL_RULES: &str = r#"
[general]
ignore_regex = '^\s*(#.*)?$'
instruction_regex = '^([A-Za-z]+)\s+(.*)$'
valid_instructions = ["FROM", "RUN"]

[[line_rules.RUN]]
regex = 'curl'
severity = "error"
message = "curl is not allowed"
"#;

/// Temporary directory holding a Dockerfile and optional rules files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_dockerfile(&self, content: &str) -> PathBuf {
        self.create_file("Dockerfile", content)
    }

    /// Writes `.dockerfile-guard.toml` so discovery from this directory finds it.
    pub fn create_local_rules(&self, content: &str) -> PathBuf {
        self.create_file(".dockerfile-guard.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
