//! Event filter - decides which file change events reach the debouncer
//!
//! Two independent checks, both of which must pass:
//! - relevance: the extension belongs to a known asset category
//! - ignore rules: hidden segments, editor temp files, OS metadata, tooling
//!   directories, plus user patterns

use std::path::{Component, Path};

use crate::domain::entities::AssetCategory;
use crate::domain::value_objects::IgnorePatterns;

const TEMP_SUFFIXES: &[&str] = &[
    ".swp", ".swo", ".swx", "~", ".tmp", ".temp", ".bak", ".part", ".crdownload",
];

const OS_METADATA: &[&str] = &["Thumbs.db", "desktop.ini", ".DS_Store", "ehthumbs.db"];

const TOOLING_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".idea",
    ".vscode",
    ".dart_tool",
    "build",
    "node_modules",
];

/// Relevance and ignore rules for watch events
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    user_patterns: IgnorePatterns,
}

impl EventFilter {
    pub fn new(user_patterns: IgnorePatterns) -> Self {
        Self { user_patterns }
    }

    /// True if the extension belongs to a known asset category
    pub fn is_relevant_asset(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(AssetCategory::from_extension)
            .is_some()
    }

    /// True if any ignore rule matches. `path` should be relative to the
    /// project root so that directories above the project do not count.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let segments: Vec<&str> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect();

        let Some((file_name, dirs)) = segments.split_last() else {
            return true;
        };

        if segments.iter().any(|s| s.starts_with('.')) {
            return true;
        }
        if dirs.iter().any(|d| TOOLING_DIRS.contains(d)) {
            return true;
        }
        if is_temp_file(file_name) || OS_METADATA.contains(file_name) {
            return true;
        }

        self.user_patterns.is_ignored(path, false)
    }

    /// Relevant and not ignored
    pub fn accepts(&self, path: &Path) -> bool {
        self.is_relevant_asset(path) && !self.should_ignore(path)
    }
}

fn is_temp_file(name: &str) -> bool {
    // vim probes directory writability with a file named 4913
    if name == "4913" {
        return true;
    }
    // emacs autosave
    if name.len() > 1 && name.starts_with('#') && name.ends_with('#') {
        return true;
    }
    let lower = name.to_ascii_lowercase();
    TEMP_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}
