//! Configuration module for assetsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETSYNC_*)
//! 3. Project config (assetsync.toml)
//! 4. User config (~/.config/assetsync/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{
    Config, DebounceStrategy, GenerateConfig, ProjectConfig, WatchConfig, PROJECT_CONFIG_FILE,
};
