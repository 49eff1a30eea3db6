//! Error types for assetsync
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! with command context.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::AssetPathError;

/// Result type alias for assetsync operations
pub type AssetSyncResult<T> = Result<T, AssetSyncError>;

/// Main error type for assetsync operations
#[derive(Error, Debug)]
pub enum AssetSyncError {
    /// The manifest document has an unexpected shape for an edit
    #[error("malformed manifest document: {reason}")]
    MalformedDocument { reason: String },

    /// The manifest document has an unexpected shape for a read
    #[error("invalid manifest: {reason}")]
    InvalidManifest { reason: String },

    /// The target section uses a layout the editor cannot splice safely
    #[error("cannot edit manifest without reformatting it: {reason}")]
    UnsupportedLayout { reason: String },

    /// A text edit did not produce the expected list (nothing was written)
    #[error("manifest edit verification failed: expected {expected:?}, found {found:?}")]
    EditVerification {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The conventional assets directory is missing
    #[error("assets directory not found: {}", path.display())]
    AssetDirectoryNotFound { path: PathBuf },

    /// The manifest file is missing
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// A path cannot be expressed as a project-relative asset path
    #[error("invalid asset path: {0}")]
    InvalidAssetPath(#[from] AssetPathError),

    /// `start` was called on an orchestrator that is already running
    #[error("watch is already running")]
    AlreadyWatching,

    /// Config file could not be parsed
    #[error("invalid config in {}: {}", file.display(), message)]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// File watcher error
    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),
}

impl AssetSyncError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_manifest(reason: impl Into<String>) -> Self {
        Self::InvalidManifest {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedLayout {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the manifest's shape rather than I/O.
    pub fn is_malformed_manifest(&self) -> bool {
        matches!(
            self,
            Self::MalformedDocument { .. } | Self::InvalidManifest { .. }
        )
    }
}
