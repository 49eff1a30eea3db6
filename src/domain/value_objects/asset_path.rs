//! Asset Path Value Object
//!
//! A project-root-relative path as it appears in the manifest's asset list.
//! Separators are always `/`; a trailing `/` marks a directory entry that
//! covers every file beneath it.

use std::fmt;
use std::path::{Component, Path};

/// Error when an asset path cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPathError {
    /// Path is empty
    Empty,
    /// Path is absolute when a root-relative path is required
    AbsoluteNotAllowed,
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path lies outside the project root
    OutsideRoot,
}

impl fmt::Display for AssetPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetPathError::Empty => write!(f, "asset path is empty"),
            AssetPathError::AbsoluteNotAllowed => {
                write!(f, "asset paths must be relative to the project root")
            }
            AssetPathError::ContainsTraversal => {
                write!(f, "asset path contains traversal components (..)")
            }
            AssetPathError::OutsideRoot => write!(f, "path is outside the project root"),
        }
    }
}

impl std::error::Error for AssetPathError {}

/// A declared (or declarable) asset path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(String);

impl AssetPath {
    /// Build from a manifest string, normalizing `\` to `/` and dropping a
    /// leading `./`.
    pub fn parse(raw: &str) -> Result<Self, AssetPathError> {
        let normalized = raw.trim().replace('\\', "/");
        let normalized = normalized.strip_prefix("./").unwrap_or(&normalized);

        if normalized.is_empty() {
            return Err(AssetPathError::Empty);
        }
        if normalized.starts_with('/') {
            return Err(AssetPathError::AbsoluteNotAllowed);
        }
        if normalized.split('/').any(|segment| segment == "..") {
            return Err(AssetPathError::ContainsTraversal);
        }

        Ok(Self(normalized.to_string()))
    }

    /// Build from a path relative to the project root.
    pub fn from_relative(path: &Path) -> Result<Self, AssetPathError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => return Err(AssetPathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(AssetPathError::AbsoluteNotAllowed)
                }
            }
        }
        if segments.is_empty() {
            return Err(AssetPathError::Empty);
        }
        Ok(Self(segments.join("/")))
    }

    /// Build from an absolute path under `root`.
    pub fn from_absolute(root: &Path, path: &Path) -> Result<Self, AssetPathError> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| AssetPathError::OutsideRoot)?;
        Self::from_relative(relative)
    }

    /// The path string as written in the manifest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for directory entries (`assets/images/`)
    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }

    /// True if this entry declares `file` either exactly or through a
    /// directory entry above it.
    pub fn covers(&self, file: &AssetPath) -> bool {
        if self.is_directory() {
            file.0.starts_with(&self.0)
        } else {
            self.0 == file.0
        }
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
