//! Manifest read-modify-write
//!
//! The file is read in full, edited in memory, and written back only when
//! the edit succeeded and changed something. A failed edit never touches
//! the file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::domain::services::{add_list_item, declared_assets, remove_list_item};
use crate::domain::value_objects::AssetPath;
use crate::error::{AssetSyncError, AssetSyncResult};

/// What a manifest edit did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestAction {
    Added,
    Removed,
}

impl ManifestAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestAction::Added => "added",
            ManifestAction::Removed => "removed",
        }
    }
}

/// Access to the asset list of one manifest file
pub struct ManifestService<F: FileSystem> {
    fs: F,
    path: PathBuf,
    section: Vec<String>,
}

impl<F: FileSystem> ManifestService<F> {
    pub fn new(fs: F, path: impl Into<PathBuf>, section: Vec<String>) -> Self {
        Self {
            fs,
            path: path.into(),
            section,
        }
    }

    pub fn from_config(fs: F, root: &Path, config: &Config) -> Self {
        Self::new(fs, config.manifest_path(root), config.project.section.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn section(&self) -> Vec<&str> {
        self.section.iter().map(String::as_str).collect()
    }

    pub fn read(&self) -> AssetSyncResult<String> {
        if !self.fs.exists(&self.path) {
            return Err(AssetSyncError::ManifestNotFound {
                path: self.path.clone(),
            });
        }
        Ok(self.fs.read(&self.path)?)
    }

    /// Declared asset paths in manifest order
    pub fn declared(&self) -> AssetSyncResult<Vec<AssetPath>> {
        declared_assets(&self.read()?, &self.section())
    }

    /// Declare `asset`. Returns `None` when it was already declared.
    pub fn add(&self, asset: &AssetPath) -> AssetSyncResult<Option<ManifestAction>> {
        let section = self.section();
        self.edit(|doc| add_list_item(doc, &section, asset.as_str()))
            .map(|changed| changed.then_some(ManifestAction::Added))
    }

    /// Remove the exact declaration of `asset`. Returns `None` when it was
    /// not declared.
    pub fn remove(&self, asset: &AssetPath) -> AssetSyncResult<Option<ManifestAction>> {
        let section = self.section();
        self.edit(|doc| remove_list_item(doc, &section, asset.as_str()))
            .map(|changed| changed.then_some(ManifestAction::Removed))
    }

    fn edit(&self, apply: impl FnOnce(&str) -> AssetSyncResult<String>) -> AssetSyncResult<bool> {
        let original = self.read()?;
        let edited = apply(&original)?;
        if edited == original {
            return Ok(false);
        }
        self.fs.write(&self.path, &edited)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use std::fs;
    use tempfile::tempdir;

    fn service(path: &Path) -> ManifestService<LocalFs> {
        ManifestService::new(LocalFs::new(), path, vec!["flutter".into(), "assets".into()])
    }

    fn asset(s: &str) -> AssetPath {
        AssetPath::parse(s).unwrap()
    }

    #[test]
    fn add_and_remove_write_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pubspec.yaml");
        fs::write(&path, "name: app\nflutter:\n  assets: []\n").unwrap();
        let manifest = service(&path);

        assert_eq!(manifest.add(&asset("assets/a.png")).unwrap(), Some(ManifestAction::Added));
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: app\nflutter:\n  assets: [assets/a.png]\n");
        assert_eq!(manifest.add(&asset("assets/a.png")).unwrap(), None);

        assert_eq!(manifest.remove(&asset("assets/a.png")).unwrap(), Some(ManifestAction::Removed));
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: app\nflutter:\n  assets: []\n");
        assert_eq!(manifest.remove(&asset("assets/a.png")).unwrap(), None);
    }

    #[test]
    fn missing_manifest_is_reported() {
        let dir = tempdir().unwrap();
        let manifest = service(&dir.path().join("pubspec.yaml"));
        let err = manifest.declared().unwrap_err();
        assert!(matches!(err, AssetSyncError::ManifestNotFound { .. }));
    }

    #[test]
    fn malformed_manifest_is_left_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pubspec.yaml");
        let original = "flutter:\n  assets: assets/\n";
        fs::write(&path, original).unwrap();

        let err = service(&path).add(&asset("assets/a.png")).unwrap_err();
        assert!(matches!(err, AssetSyncError::MalformedDocument { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
