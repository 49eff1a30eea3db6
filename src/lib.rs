//! assetsync - keeps a Flutter asset manifest and a generated Dart constants
//! file in sync with the assets directory.
//!
//! The manifest is edited as text, so comments, key order, and formatting
//! outside the touched list survive every edit.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CheckReport, CheckUseCase, CodeGenerator, GenerateReport, ManifestAction, ManifestService,
    WatchEvent, WatchOptions, WatchOrchestrator,
};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{AssetCategory, ChangeKind, FileChangeEvent, ScannedAsset};
pub use domain::services::{add_list_item, remove_list_item, EventFilter};
pub use domain::value_objects::AssetPath;
pub use error::{AssetSyncError, AssetSyncResult};
pub use infrastructure::{LocalFs, NotifyEventSource};
