//! Code generation use case
//!
//! Scans the assets directory and rewrites the Dart artifact in full. The
//! freshness check renders the same text in memory, so `generate` and
//! `is_up_to_date` can never disagree.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::domain::services::{render_dart, DartOptions};
use crate::error::AssetSyncResult;
use crate::infrastructure::scanner;

/// Outcome of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub output: PathBuf,
    /// Number of asset constants emitted
    pub assets: usize,
    /// False when the artifact already had these exact bytes
    pub changed: bool,
}

/// Rendered artifact held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub content: String,
    pub assets: usize,
}

pub struct CodeGenerator<F: FileSystem> {
    fs: F,
    root: PathBuf,
    assets_dir: PathBuf,
    output: PathBuf,
    options: DartOptions,
}

impl<F: FileSystem> CodeGenerator<F> {
    /// `assets_dir` is relative to `root`; `output` may be either.
    pub fn new(
        fs: F,
        root: impl Into<PathBuf>,
        assets_dir: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        options: DartOptions,
    ) -> Self {
        let root = root.into();
        let output = root.join(output.into());
        Self {
            fs,
            root,
            assets_dir: assets_dir.into(),
            output,
            options,
        }
    }

    pub fn from_config(fs: F, root: &Path, config: &Config) -> Self {
        Self::new(
            fs,
            root,
            &config.project.assets_dir,
            &config.generate.output,
            config.dart_options(),
        )
    }

    /// Absolute path of the artifact
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Scan and render without writing
    pub fn render(&self) -> AssetSyncResult<Artifact> {
        let assets = scanner::scan(&self.root, &self.assets_dir)?;
        Ok(Artifact {
            content: render_dart(&assets, &self.options),
            assets: assets.len(),
        })
    }

    /// Current artifact on disk, if any
    pub fn existing(&self) -> AssetSyncResult<Option<String>> {
        if !self.fs.exists(&self.output) {
            return Ok(None);
        }
        Ok(Some(self.fs.read(&self.output)?))
    }

    /// Regenerate the artifact. Identical bytes are not rewritten.
    pub fn generate(&self) -> AssetSyncResult<GenerateReport> {
        let artifact = self.render()?;
        let changed = self.existing()?.as_deref() != Some(artifact.content.as_str());
        if changed {
            self.fs.write(&self.output, &artifact.content)?;
        }
        Ok(GenerateReport {
            output: self.output.clone(),
            assets: artifact.assets,
            changed,
        })
    }

    /// True if the artifact exists and matches a fresh render byte for byte
    pub fn is_up_to_date(&self) -> AssetSyncResult<bool> {
        match self.existing()? {
            Some(existing) => Ok(existing == self.render()?.content),
            None => Ok(false),
        }
    }
}
