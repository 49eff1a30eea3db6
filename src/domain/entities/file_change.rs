//! File change events delivered by the watch subsystem

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What happened to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Removed => "removed",
        }
    }
}

/// A single filesystem notification, consumed once by the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChangeEvent {
    pub kind: ChangeKind,
    /// Absolute path of the changed file
    pub path: PathBuf,
    pub observed_at: DateTime<Utc>,
}

impl FileChangeEvent {
    /// Create an event stamped with the current time
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            observed_at: Utc::now(),
        }
    }

    pub fn added(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Added, path)
    }

    pub fn modified(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Modified, path)
    }

    pub fn removed(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Removed, path)
    }
}
