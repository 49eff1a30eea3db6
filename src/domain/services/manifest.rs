//! Declared manifest store
//!
//! Read-only view of the asset list declared in the manifest. Resolution
//! goes through `resolve_section`, the same function the editor uses.

use crate::domain::services::document::{resolve_section, DocNode, SectionLookup};
use crate::domain::value_objects::AssetPath;
use crate::error::{AssetSyncError, AssetSyncResult};

/// Declared asset paths in document order. Missing keys or a null list
/// yield an empty list.
pub fn declared_assets(document: &str, section: &[&str]) -> AssetSyncResult<Vec<AssetPath>> {
    let root = DocNode::parse(document)
        .map_err(|e| AssetSyncError::invalid_manifest(e.to_string()))?;

    let items = match resolve_section(&root, section).map_err(AssetSyncError::invalid_manifest)? {
        SectionLookup::List(items) => items,
        SectionLookup::Absent => return Ok(Vec::new()),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let raw = item.as_scalar().ok_or_else(|| {
                AssetSyncError::invalid_manifest(format!(
                    "'{}' item {} is a {}, expected a path",
                    section.join("."),
                    index + 1,
                    item.kind()
                ))
            })?;
            AssetPath::parse(raw).map_err(|e| {
                AssetSyncError::invalid_manifest(format!("'{}': {}", raw, e))
            })
        })
        .collect()
}

/// True if `path` is declared exactly (directory entries do not count; use
/// [`is_covered`] for that).
pub fn has_asset(document: &str, section: &[&str], path: &AssetPath) -> AssetSyncResult<bool> {
    Ok(declared_assets(document, section)?.iter().any(|p| p == path))
}

/// True if any declaration covers `path`, exactly or via a directory entry.
pub fn is_covered(declared: &[AssetPath], path: &AssetPath) -> bool {
    declared.iter().any(|entry| entry.covers(path))
}
