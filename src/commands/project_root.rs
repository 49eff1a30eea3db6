use std::path::{Path, PathBuf};

use assetsync::config::PROJECT_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Walking upward from `start`, the first directory holding
/// `assetsync.toml` or `pubspec.yaml` wins. Falls back to `start`.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() || dir.join("pubspec.yaml").is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
