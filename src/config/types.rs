//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::services::{DartOptions, EventFilter};
use crate::domain::value_objects::{ConfigWarning, IgnorePatterns};
use crate::error::{AssetSyncError, AssetSyncResult};

use super::loader;

/// File name looked up at the project root
pub const PROJECT_CONFIG_FILE: &str = "assetsync.toml";

/// Project layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Manifest file, relative to the project root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Watched assets directory, relative to the project root
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Key path of the asset list inside the manifest
    #[serde(default = "default_section")]
    pub section: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            assets_dir: default_assets_dir(),
            section: default_section(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("pubspec.yaml")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_section() -> Vec<String> {
    vec!["flutter".to_string(), "assets".to_string()]
}

/// Generated Dart file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_class_name")]
    pub class_name: String,

    #[serde(default = "default_list_name")]
    pub list_name: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            class_name: default_class_name(),
            list_name: default_list_name(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("lib/gen/assets.dart")
}

fn default_class_name() -> String {
    "Assets".to_string()
}

fn default_list_name() -> String {
    "values".to_string()
}

/// How bursts of events are coalesced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DebounceStrategy {
    /// One shared timer; a burst settles once
    #[default]
    Batch,
    /// One timer per path
    PerPath,
}

impl DebounceStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "batch" | "shared" => Some(Self::Batch),
            "per-path" | "per_path" | "perpath" | "keyed" => Some(Self::PerPath),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::PerPath => "per-path",
        }
    }
}

/// Watch loop settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub strategy: DebounceStrategy,

    /// Regenerate when an already-declared asset's content changes
    #[serde(default)]
    pub regenerate_on_modify: bool,

    /// Extra gitignore-style patterns, relative to the project root
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            strategy: DebounceStrategy::default(),
            regenerate_on_modify: false,
            ignore: Vec::new(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetSyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetSyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, else user config, else defaults; then `ASSETSYNC_*`
    /// environment overrides.
    pub fn load_or_default(project_root: &Path) -> AssetSyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ASSETSYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values the rest of the tool cannot work with.
    pub fn validate(&self, file: &Path) -> AssetSyncResult<()> {
        let invalid = |message: String| AssetSyncError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        if self.project.section.is_empty() || self.project.section.iter().any(|k| k.is_empty()) {
            return Err(invalid("project.section must name at least one non-empty key".into()));
        }
        for (key, name) in [
            ("generate.class_name", &self.generate.class_name),
            ("generate.list_name", &self.generate.list_name),
        ] {
            if !is_dart_identifier(name) {
                return Err(invalid(format!("{} '{}' is not a valid Dart identifier", key, name)));
            }
        }
        if self.generate.class_name == self.generate.list_name {
            return Err(invalid("generate.class_name and generate.list_name must differ".into()));
        }
        Ok(())
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.project.manifest)
    }

    pub fn assets_path(&self, root: &Path) -> PathBuf {
        root.join(&self.project.assets_dir)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.generate.output)
    }

    /// Section keys as borrowed strs, the form the editor takes
    pub fn section(&self) -> Vec<&str> {
        self.project.section.iter().map(String::as_str).collect()
    }

    /// Built-in ignore rules plus `watch.ignore`, compiled once
    pub fn event_filter(&self, root: &Path) -> AssetSyncResult<EventFilter> {
        let patterns = IgnorePatterns::from_patterns(&self.watch.ignore).map_err(|e| {
            AssetSyncError::InvalidConfig {
                file: root.join(PROJECT_CONFIG_FILE),
                message: format!("watch.ignore: {}", e),
            }
        })?;
        Ok(EventFilter::new(patterns))
    }

    pub fn dart_options(&self) -> DartOptions {
        DartOptions {
            class_name: self.generate.class_name.clone(),
            list_name: self.generate.list_name.clone(),
        }
    }
}

fn is_dart_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
