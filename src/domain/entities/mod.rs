//! Domain Entities
//!
//! - `ScannedAsset` - A file found under the assets directory
//! - `FileChangeEvent` - One notification from the watch subsystem

mod asset;
mod file_change;

pub use asset::{AssetCategory, ScannedAsset};
pub use file_change::{ChangeKind, FileChangeEvent};
