//! Ignore patterns value object
//!
//! User-supplied exclusion patterns (`[watch] ignore` in the config) with
//! gitignore semantics.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::Path;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled gitignore-style patterns, matched against root-relative paths.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// A pattern set that matches nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile `patterns`. Blank entries and `#` comments are skipped.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new("");
        let mut pattern_count = 0;

        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            let trimmed = pattern.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    count: patterns.len(),
                    limit: MAX_PATTERNS,
                });
            }

            builder.add_line(None, trimmed).map_err(|e| IgnoreError::InvalidPattern {
                index: index + 1,
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check a root-relative path (or any of its parents).
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when compiling ignore patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreError {
    TooManyPatterns {
        count: usize,
        limit: usize,
    },
    /// A pattern has invalid syntax. `index` is 1-based.
    InvalidPattern {
        index: usize,
        pattern: String,
        message: String,
    },
    BuildFailed(String),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPatterns { count, limit } => {
                write!(f, "{} ignore patterns, exceeds {} limit", count, limit)
            }
            Self::InvalidPattern {
                index,
                pattern,
                message,
            } => write!(f, "invalid ignore pattern #{} '{}': {}", index, pattern, message),
            Self::BuildFailed(msg) => write!(f, "failed to build ignore matcher: {}", msg),
        }
    }
}

impl std::error::Error for IgnoreError {}
