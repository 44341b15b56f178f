//! Rule set management module
//!
//! Holds the blocked common passwords and the recognised special characters,
//! and loads additional blocked passwords from an external file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Passwords rejected outright, compared case-insensitively.
pub const COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+=-[]{};:,.<>/?";

/// Environment variable naming an additional blocklist file.
pub const BLOCKLIST_PATH_ENV: &str = "PWD_BLOCKLIST_PATH";

static STANDARD_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::build_standard);

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blocklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blocklist file is empty")]
    EmptyFile,
}

/// Immutable configuration the evaluator scores against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    common_passwords: HashSet<String>,
    special_characters: HashSet<char>,
}

impl RuleSet {
    /// Returns the process-wide standard rule set.
    pub fn standard() -> &'static RuleSet {
        &STANDARD_RULES
    }

    fn build_standard() -> Self {
        Self {
            common_passwords: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
            special_characters: SPECIAL_CHARACTERS.chars().collect(),
        }
    }

    /// Builds a rule set from the standard one, extended with the
    /// passwords listed in `path` (one per line).
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn with_blocklist_file<P: AsRef<Path>>(path: P) -> Result<Self, BlocklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist loading FAILED: FileNotFound {}", path.display());
            return Err(BlocklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist loading FAILED: Empty file {}", path.display());
            return Err(BlocklistError::EmptyFile);
        }

        let mut rules = Self::build_standard();
        rules.common_passwords.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blocklist loaded: {} blocked passwords from {:?}",
            rules.common_passwords.len(),
            path
        );

        Ok(rules)
    }

    /// Builds the rule set selected by the environment.
    ///
    /// Uses `PWD_BLOCKLIST_PATH` when set, otherwise the standard rule set.
    pub fn from_env() -> Result<Self, BlocklistError> {
        match get_blocklist_path() {
            Some(path) => Self::with_blocklist_file(path),
            None => Ok(Self::standard().clone()),
        }
    }

    /// Checks whether `password` exactly matches a blocked password,
    /// ignoring case.
    pub fn is_common(&self, password: &str) -> bool {
        self.common_passwords.contains(&password.to_lowercase())
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special_characters.contains(&c)
    }

    /// Number of blocked passwords.
    pub fn blocked_count(&self) -> usize {
        self.common_passwords.len()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Returns the blocklist file path from `PWD_BLOCKLIST_PATH`, if set and non-empty.
pub fn get_blocklist_path() -> Option<PathBuf> {
    std::env::var(BLOCKLIST_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}
