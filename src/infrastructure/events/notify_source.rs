//! notify-backed event source
//!
//! Translates raw `notify` events into `FileChangeEvent`s and forwards them
//! over an mpsc channel. Dropping the watcher ends the subscription.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::entities::{ChangeKind, FileChangeEvent};
use crate::domain::ports::EventSource;
use crate::error::AssetSyncResult;

/// Recursive OS-level watcher
#[derive(Default)]
pub struct NotifyEventSource {
    watcher: Option<RecommendedWatcher>,
}

impl NotifyEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self) -> bool {
        self.watcher.is_some()
    }
}

impl EventSource for NotifyEventSource {
    fn subscribe(&mut self, root: &Path) -> AssetSyncResult<Receiver<FileChangeEvent>> {
        self.unsubscribe();

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for change in translate(&event) {
                        let _ = tx.send(change);
                    }
                }
            },
            notify::Config::default(),
        )?;
        watcher.watch(root, RecursiveMode::Recursive)?;

        self.watcher = Some(watcher);
        Ok(rx)
    }

    fn unsubscribe(&mut self) {
        self.watcher = None;
    }
}

/// Map one notify event to zero or more change events.
pub(crate) fn translate(event: &Event) -> Vec<FileChangeEvent> {
    let by_existence = |path: &PathBuf| {
        if path.exists() {
            ChangeKind::Added
        } else {
            ChangeKind::Removed
        }
    };

    let kinds: Vec<(ChangeKind, &PathBuf)> = match event.kind {
        EventKind::Create(_) => event.paths.iter().map(|p| (ChangeKind::Added, p)).collect(),
        EventKind::Remove(_) => event.paths.iter().map(|p| (ChangeKind::Removed, p)).collect(),
        EventKind::Modify(ModifyKind::Name(mode)) => match mode {
            RenameMode::From => event.paths.iter().map(|p| (ChangeKind::Removed, p)).collect(),
            RenameMode::To => event.paths.iter().map(|p| (ChangeKind::Added, p)).collect(),
            RenameMode::Both if event.paths.len() == 2 => vec![
                (ChangeKind::Removed, &event.paths[0]),
                (ChangeKind::Added, &event.paths[1]),
            ],
            _ => event.paths.iter().map(|p| (by_existence(p), p)).collect(),
        },
        EventKind::Modify(_) => event.paths.iter().map(|p| (ChangeKind::Modified, p)).collect(),
        EventKind::Any => event
            .paths
            .iter()
            .map(|p| {
                let kind = match by_existence(p) {
                    ChangeKind::Added => ChangeKind::Modified,
                    other => other,
                };
                (kind, p)
            })
            .collect(),
        EventKind::Access(_) | EventKind::Other => Vec::new(),
    };

    kinds
        .into_iter()
        .map(|(kind, path)| FileChangeEvent::new(kind, path.clone()))
        .collect()
}
