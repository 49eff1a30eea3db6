//! Asset scanner - enumerates asset files under the assets directory
//!
//! Uses `ignore::WalkBuilder` with every standard filter turned off: the
//! scanner reports what is on disk, and exclusion rules belong to the
//! event filter.

use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::entities::ScannedAsset;
use crate::domain::value_objects::AssetPath;
use crate::error::{AssetSyncError, AssetSyncResult};

/// Scan `<project_root>/<assets_dir>` recursively.
///
/// A missing directory yields an empty list. The result is sorted by
/// relative path.
pub fn scan(project_root: &Path, assets_dir: &Path) -> AssetSyncResult<Vec<ScannedAsset>> {
    let dir = project_root.join(assets_dir);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut assets = Vec::new();
    let walker = WalkBuilder::new(&dir)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => AssetSyncError::Io(io),
            None => AssetSyncError::Io(std::io::Error::other("directory walk failed")),
        })?;

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let Ok(relative) = AssetPath::from_absolute(project_root, entry.path()) else {
            continue;
        };
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if let Some(asset) = ScannedAsset::from_relative_path(relative.as_str(), size) {
            assets.push(asset);
        }
    }

    assets.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AssetCategory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_assets_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(scan(dir.path(), Path::new("assets")).unwrap().is_empty());
    }

    #[test]
    fn scans_recursively_sorted_with_metadata() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets/images/icons")).unwrap();
        fs::create_dir_all(root.join("assets/fonts")).unwrap();
        fs::write(root.join("assets/images/logo.PNG"), b"12345").unwrap();
        fs::write(root.join("assets/images/icons/home.svg"), b"<svg/>").unwrap();
        fs::write(root.join("assets/fonts/Inter.ttf"), b"").unwrap();
        fs::write(root.join("assets/notes.md"), b"skip").unwrap();

        let assets = scan(root, Path::new("assets")).unwrap();
        let paths: Vec<_> = assets.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "assets/fonts/Inter.ttf",
                "assets/images/icons/home.svg",
                "assets/images/logo.PNG",
            ]
        );

        let logo = &assets[2];
        assert_eq!(logo.name, "logo");
        assert_eq!(logo.extension, "png");
        assert_eq!(logo.size, 5);
        assert_eq!(logo.category, AssetCategory::Image);
    }

    #[test]
    fn gitignore_and_hidden_files_do_not_filter_the_scan() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("assets/.gitignore"), "*.png\n").unwrap();
        fs::write(root.join("assets/a.png"), b"").unwrap();
        fs::write(root.join("assets/.b.png"), b"").unwrap();

        let assets = scan(root, Path::new("assets")).unwrap();
        let paths: Vec<_> = assets.iter().map(|a| a.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["assets/.b.png", "assets/a.png"]);
    }
}
