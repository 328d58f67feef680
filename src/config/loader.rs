use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{GuardError, Result};

use super::RuleSet;
use super::defaults::{BUNDLED_RULES_ORIGIN, bundled_rule_set};

/// Where the active rule set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesOrigin {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for RulesOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str(BUNDLED_RULES_ORIGIN),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of loading rules: the compiled set plus where it was found.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub rules: RuleSet,
    pub origin: RulesOrigin,
}

/// Trait for loading rule sets from various sources.
pub trait RulesLoader {
    /// Discover rules in the default locations, falling back to the bundled set.
    ///
    /// # Errors
    /// Returns an error if a discovered rules file cannot be read or compiled.
    fn load(&self) -> Result<LoadResult>;

    /// Load rules from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, malformed, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_RULES_NAME: &str = ".dockerfile-guard.toml";
pub const USER_RULES_NAME: &str = "rules.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform configuration directory for dockerfile-guard:
    /// - Windows: `%APPDATA%\dockerfile-guard`
    /// - macOS: `~/Library/Application Support/dockerfile-guard`
    /// - Linux: `~/.config/dockerfile-guard` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dockerfile-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads rule sets from the filesystem.
///
/// Search order for [`RulesLoader::load`]:
/// 1. `.dockerfile-guard.toml` in the current directory
/// 2. `rules.toml` in the platform config directory
/// 3. The bundled default rules
#[derive(Debug)]
pub struct FileRulesLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileRulesLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRulesLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileRulesLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_rules_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_RULES_NAME))
    }

    fn user_rules_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_RULES_NAME))
    }

    /// Load the bundled rules without touching the filesystem.
    ///
    /// # Errors
    /// Only fails if the embedded document is broken.
    pub fn load_bundled(&self) -> Result<LoadResult> {
        debug!("Using {BUNDLED_RULES_ORIGIN}");
        Ok(LoadResult {
            rules: bundled_rule_set()?,
            origin: RulesOrigin::Bundled,
        })
    }
}

impl<F: FileSystem> RulesLoader for FileRulesLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_rules_path(), self.user_rules_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                debug!("Discovered rules file {}", path.display());
                return self.load_from_path(&path);
            }
        }
        self.load_bundled()
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| GuardError::RulesRead {
                path: path.to_path_buf(),
                source,
            })?;
        let rules = RuleSet::from_toml_str(&content, path)?;
        debug!("Loaded rules from {}", path.display());
        Ok(LoadResult {
            rules,
            origin: RulesOrigin::File(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
