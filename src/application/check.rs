//! Check use case
//!
//! Compares the manifest, the assets on disk, and the generated artifact
//! without writing anything:
//! - assets on disk that no declaration covers
//! - declared paths that do not exist
//! - a stale artifact, with a unified diff

use std::path::{Path, PathBuf};

use serde::Serialize;
use similar::TextDiff;

use crate::domain::ports::FileSystem;
use crate::domain::services::{is_covered, EventFilter};
use crate::domain::value_objects::AssetPath;
use crate::error::AssetSyncResult;
use crate::infrastructure::scanner;

use super::generate::CodeGenerator;
use super::manifest::ManifestService;

/// Artifact that differs from a fresh render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleArtifact {
    pub output: PathBuf,
    /// False when the artifact has never been generated
    pub exists: bool,
    /// Unified diff from the current file to the expected one
    pub diff: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub undeclared: Vec<String>,
    pub missing: Vec<String>,
    pub stale: Option<StaleArtifact>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.undeclared.is_empty() && self.missing.is_empty() && self.stale.is_none()
    }

    pub fn issue_count(&self) -> usize {
        self.undeclared.len() + self.missing.len() + usize::from(self.stale.is_some())
    }
}

/// Read-only comparison of manifest, disk, and artifact
pub struct CheckUseCase<'a, F: FileSystem> {
    root: &'a Path,
    assets_dir: &'a Path,
    manifest: &'a ManifestService<F>,
    generator: &'a CodeGenerator<F>,
    filter: &'a EventFilter,
}

impl<'a, F: FileSystem> CheckUseCase<'a, F> {
    pub fn new(
        root: &'a Path,
        assets_dir: &'a Path,
        manifest: &'a ManifestService<F>,
        generator: &'a CodeGenerator<F>,
        filter: &'a EventFilter,
    ) -> Self {
        Self {
            root,
            assets_dir,
            manifest,
            generator,
            filter,
        }
    }

    pub fn execute(&self) -> AssetSyncResult<CheckReport> {
        let declared = self.manifest.declared()?;
        let scanned = scanner::scan(self.root, self.assets_dir)?;

        let undeclared = scanned
            .iter()
            .filter(|asset| !self.filter.should_ignore(Path::new(&asset.relative_path)))
            .filter_map(|asset| AssetPath::parse(&asset.relative_path).ok())
            .filter(|path| !is_covered(&declared, path))
            .map(|path| path.to_string())
            .collect();

        let missing = declared
            .iter()
            .filter(|path| !self.root.join(path.as_str()).exists())
            .map(|path| path.to_string())
            .collect();

        let expected = self.generator.render()?.content;
        let stale = match self.generator.existing()? {
            Some(current) if current == expected => None,
            current => Some(StaleArtifact {
                output: self.generator.output().to_path_buf(),
                exists: current.is_some(),
                diff: unified_diff(
                    current.as_deref().unwrap_or(""),
                    &expected,
                    &self.display_output(),
                ),
            }),
        };

        Ok(CheckReport {
            undeclared,
            missing,
            stale,
        })
    }

    fn display_output(&self) -> String {
        let output = self.generator.output();
        output
            .strip_prefix(self.root)
            .unwrap_or(output)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

fn unified_diff(current: &str, expected: &str, name: &str) -> String {
    TextDiff::from_lines(current, expected)
        .unified_diff()
        .context_radius(2)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}
