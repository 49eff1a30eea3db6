//! Configuration loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{AssetSyncError, AssetSyncResult};

use super::types::{Config, DebounceStrategy, PROJECT_CONFIG_FILE};

/// Every key the config format knows, for typo suggestions
const KNOWN_KEYS: &[&str] = &[
    "project",
    "manifest",
    "assets_dir",
    "section",
    "generate",
    "output",
    "class_name",
    "list_name",
    "watch",
    "debounce_ms",
    "strategy",
    "regenerate_on_modify",
    "ignore",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetSyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetSyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|dotted| {
            let leaf = dotted.rsplit('.').next().unwrap_or(&dotted).to_string();
            ConfigWarning {
                line: find_line_number(&content, &leaf),
                suggestion: suggest_key(&leaf),
                key: dotted,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply env
/// overrides.
pub fn load_or_default(project_root: &Path) -> AssetSyncResult<(Config, Vec<ConfigWarning>)> {
    let user_dir = dirs::config_dir();
    let (config, warnings) = load_layered(project_root, user_dir.as_deref())?;
    Ok((with_env_overrides(config), warnings))
}

/// First config file found wins; files are not merged.
pub(crate) fn load_layered(
    project_root: &Path,
    user_config_dir: Option<&Path>,
) -> AssetSyncResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return load_with_warnings(&project_config);
    }

    if let Some(dir) = user_config_dir {
        let user_config = dir.join("assetsync").join("config.toml");
        if user_config.is_file() {
            return load_with_warnings(&user_config);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (ASSETSYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Unparsable values are ignored and the configured value is kept.
pub(crate) fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // ASSETSYNC_DEBOUNCE_MS
    if let Some(ms) = lookup("ASSETSYNC_DEBOUNCE_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
        config.watch.debounce_ms = ms;
    }

    // ASSETSYNC_OUTPUT
    if let Some(output) = lookup("ASSETSYNC_OUTPUT").filter(|v| !v.trim().is_empty()) {
        config.generate.output = output.trim().into();
    }

    // ASSETSYNC_STRATEGY
    if let Some(strategy) = lookup("ASSETSYNC_STRATEGY").and_then(|v| DebounceStrategy::parse(&v)) {
        config.watch.strategy = strategy;
    }

    config
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start();
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('=') || rest.starts_with('.'))
                || line.trim_start_matches('[').trim_end_matches(']') == key
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}
