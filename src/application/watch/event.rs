//! Watch event types and options

use std::path::PathBuf;

use serde::Serialize;

use crate::application::manifest::ManifestAction;
use crate::config::Config;
use crate::domain::entities::ChangeKind;

/// Upper bound on one blocking receive, so `stop()` is observed promptly
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Project root; every reported path is relative to it
    pub project_root: PathBuf,
    pub config: Config,
}

impl WatchOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

/// Events emitted during watch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        root: String,
        assets_dir: String,
        manifest: String,
        output: String,
        debounce_ms: u64,
        strategy: String,
    },
    FileChanged {
        path: String,
        kind: ChangeKind,
    },
    ManifestUpdated {
        path: String,
        action: ManifestAction,
    },
    Generated {
        output: String,
        assets: usize,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    /// One NDJSON line, tagged with the command name
    pub fn to_json(&self) -> String {
        let mut value = serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "event": "error", "message": "unserializable event" })
        });
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "command".to_string(),
                serde_json::Value::String("watch".to_string()),
            );
        }
        serde_json::to_string(&value).unwrap_or_default()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error { .. })
    }
}
