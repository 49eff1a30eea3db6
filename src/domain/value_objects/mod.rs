//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_path;
mod config_warning;
mod ignore_patterns;

pub use asset_path::{AssetPath, AssetPathError};
pub use config_warning::ConfigWarning;
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
