//! Watch orchestrator
//!
//! Runs the blocking watch loop: subscribe, filter, debounce, then apply each
//! settled change to the manifest and regenerate the artifact.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::generate::CodeGenerator;
use crate::application::manifest::{ManifestAction, ManifestService};
use crate::config::DebounceStrategy;
use crate::domain::entities::{ChangeKind, FileChangeEvent};
use crate::domain::ports::{EventSource, FileSystem};
use crate::domain::services::{is_covered, EventFilter};
use crate::domain::value_objects::AssetPath;
use crate::error::{AssetSyncError, AssetSyncResult};

use super::debouncer::{DebounceMode, Debouncer};
use super::event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};

/// Lifecycle of an orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Watching,
    Stopping,
}

impl WatchState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => WatchState::Watching,
            2 => WatchState::Stopping,
            _ => WatchState::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            WatchState::Idle => 0,
            WatchState::Watching => 1,
            WatchState::Stopping => 2,
        }
    }
}

/// Cloneable handle that ends a running watch from any thread
#[derive(Debug, Clone)]
pub struct StopHandle {
    state: Arc<AtomicU8>,
}

impl StopHandle {
    /// Move `Watching` to `Stopping`. Calling it again, or while idle, does
    /// nothing.
    pub fn stop(&self) {
        let _ = self.state.compare_exchange(
            WatchState::Watching.as_u8(),
            WatchState::Stopping.as_u8(),
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }

    pub fn state(&self) -> WatchState {
        WatchState::from_u8(self.state.load(Ordering::SeqCst))
    }
}

/// Timer key: one shared window, or one window per path
#[derive(Debug, Clone, PartialEq, Eq)]
enum SettleKey {
    Batch,
    Path(PathBuf),
}

/// What one path's manifest work asked for
struct PathOutcome {
    action: Option<ManifestAction>,
    regenerate: bool,
}

/// Watch Orchestrator
///
/// Main entry point for `assetsync watch`. All manifest and artifact writes
/// happen on the thread that calls [`WatchOrchestrator::start`].
pub struct WatchOrchestrator<F: FileSystem> {
    fs: F,
    options: WatchOptions,
    filter: EventFilter,
    state: Arc<AtomicU8>,
}

impl<F: FileSystem> WatchOrchestrator<F> {
    /// Fails with `InvalidConfig` when `watch.ignore` does not compile.
    pub fn new(fs: F, options: WatchOptions) -> AssetSyncResult<Self> {
        let filter = options.config.event_filter(&options.project_root)?;
        Ok(Self {
            fs,
            options,
            filter,
            state: Arc::new(AtomicU8::new(WatchState::Idle.as_u8())),
        })
    }

    pub fn state(&self) -> WatchState {
        WatchState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            state: Arc::clone(&self.state),
        }
    }

    pub fn stop(&self) {
        self.stop_handle().stop();
    }

    /// Start watching (blocking)
    ///
    /// Returns after `stop()`, or when the event source closes its channel.
    /// Per-path failures are reported through `on_event` and never end the
    /// loop.
    pub fn start<S, E>(&self, mut source: S, on_event: E) -> AssetSyncResult<()>
    where
        S: EventSource,
        E: Fn(WatchEvent),
    {
        let root = &self.options.project_root;
        let config = &self.options.config;
        let assets_root = config.assets_path(root);
        if !assets_root.is_dir() {
            return Err(AssetSyncError::AssetDirectoryNotFound { path: assets_root });
        }

        self.state
            .compare_exchange(
                WatchState::Idle.as_u8(),
                WatchState::Watching.as_u8(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map_err(|_| AssetSyncError::AlreadyWatching)?;

        let rx = match source.subscribe(&assets_root) {
            Ok(rx) => rx,
            Err(e) => {
                self.set_state(WatchState::Idle);
                return Err(e);
            }
        };

        on_event(WatchEvent::WatchStarted {
            root: root.display().to_string(),
            assets_dir: display_path(&config.project.assets_dir),
            manifest: display_path(&config.project.manifest),
            output: display_path(&config.generate.output),
            debounce_ms: config.watch.debounce_ms,
            strategy: config.watch.strategy.as_str().to_string(),
        });

        self.initial_sync(&on_event);

        let mode = match config.watch.strategy {
            DebounceStrategy::Batch => DebounceMode::Shared,
            DebounceStrategy::PerPath => DebounceMode::Keyed,
        };
        let mut debouncer: Debouncer<SettleKey, ()> = Debouncer::new(mode);
        let mut pending: BTreeMap<PathBuf, FileChangeEvent> = BTreeMap::new();
        let poll = Duration::from_millis(POLL_INTERVAL_MS);

        while self.state() == WatchState::Watching {
            let timeout = debouncer
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()).min(poll))
                .unwrap_or(poll);

            match rx.recv_timeout(timeout) {
                Ok(event) => {
                    self.enqueue(event, &mut pending, &mut debouncer);
                    while let Ok(event) = rx.try_recv() {
                        self.enqueue(event, &mut pending, &mut debouncer);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if self.state() != WatchState::Watching {
                break;
            }

            let ready = debouncer.take_ready(Instant::now());
            if !ready.is_empty() {
                let batch = collect_settled(ready, &mut pending);
                self.settle(batch, &on_event);
            }
        }

        self.set_state(WatchState::Stopping);
        debouncer.dispose();
        source.unsubscribe();
        on_event(WatchEvent::Shutdown);
        self.set_state(WatchState::Idle);
        Ok(())
    }

    fn set_state(&self, state: WatchState) {
        self.state.store(state.as_u8(), Ordering::SeqCst);
    }

    fn manifest(&self) -> ManifestService<&F> {
        ManifestService::from_config(&self.fs, &self.options.project_root, &self.options.config)
    }

    fn generator(&self) -> CodeGenerator<&F> {
        CodeGenerator::from_config(&self.fs, &self.options.project_root, &self.options.config)
    }

    /// Bring a stale artifact up to date before the first event arrives
    fn initial_sync(&self, on_event: &impl Fn(WatchEvent)) {
        let generator = self.generator();
        match generator.is_up_to_date() {
            Ok(true) => {}
            Ok(false) => self.regenerate(&generator, on_event),
            Err(e) => on_event(WatchEvent::Error {
                path: None,
                message: e.to_string(),
            }),
        }
    }

    fn enqueue(
        &self,
        event: FileChangeEvent,
        pending: &mut BTreeMap<PathBuf, FileChangeEvent>,
        debouncer: &mut Debouncer<SettleKey, ()>,
    ) {
        let Some(relative) = self.relative(&event.path) else {
            return;
        };
        if !self.filter.accepts(relative) {
            return;
        }

        let key = match debouncer.mode() {
            DebounceMode::Shared => SettleKey::Batch,
            DebounceMode::Keyed => SettleKey::Path(event.path.clone()),
        };
        pending.insert(event.path.clone(), event);
        debouncer.schedule(key, (), self.options.config.watch.debounce());
    }

    fn relative<'p>(&self, path: &'p Path) -> Option<&'p Path> {
        path.strip_prefix(&self.options.project_root).ok()
    }

    /// Apply one settle window: manifest work per path, then at most one
    /// regeneration.
    fn settle(&self, batch: Vec<FileChangeEvent>, on_event: &impl Fn(WatchEvent)) {
        let manifest = self.manifest();
        let mut regenerate = false;

        for event in batch {
            let Some(relative) = self.relative(&event.path) else {
                continue;
            };
            let display = display_path(relative);
            let kind = reconcile(event.kind, self.fs.exists(&event.path));

            on_event(WatchEvent::FileChanged {
                path: display.clone(),
                kind,
            });

            match self.apply_change(&manifest, relative, kind) {
                Ok(outcome) => {
                    if let Some(action) = outcome.action {
                        on_event(WatchEvent::ManifestUpdated {
                            path: display,
                            action,
                        });
                    }
                    regenerate |= outcome.regenerate;
                }
                Err(e) => on_event(WatchEvent::Error {
                    path: Some(display),
                    message: e.to_string(),
                }),
            }
        }

        if regenerate {
            self.regenerate(&self.generator(), on_event);
        }
    }

    fn apply_change(
        &self,
        manifest: &ManifestService<&F>,
        relative: &Path,
        kind: ChangeKind,
    ) -> AssetSyncResult<PathOutcome> {
        let asset = AssetPath::from_relative(relative)?;

        match kind {
            ChangeKind::Removed => Ok(PathOutcome {
                action: manifest.remove(&asset)?,
                regenerate: true,
            }),
            ChangeKind::Added | ChangeKind::Modified => {
                if !is_covered(&manifest.declared()?, &asset) {
                    return Ok(PathOutcome {
                        action: manifest.add(&asset)?,
                        regenerate: true,
                    });
                }
                Ok(PathOutcome {
                    action: None,
                    regenerate: kind == ChangeKind::Added
                        || self.options.config.watch.regenerate_on_modify,
                })
            }
        }
    }

    fn regenerate(&self, generator: &CodeGenerator<&F>, on_event: &impl Fn(WatchEvent)) {
        match generator.generate() {
            Ok(report) => on_event(WatchEvent::Generated {
                output: self
                    .relative(&report.output)
                    .map(display_path)
                    .unwrap_or_else(|| report.output.display().to_string()),
                assets: report.assets,
            }),
            Err(e) => on_event(WatchEvent::Error {
                path: Some(display_path(&self.options.config.generate.output)),
                message: e.to_string(),
            }),
        }
    }
}

/// Drain the pending events a settle window covers, ordered by path
fn collect_settled(
    ready: Vec<(SettleKey, ())>,
    pending: &mut BTreeMap<PathBuf, FileChangeEvent>,
) -> Vec<FileChangeEvent> {
    if ready.iter().any(|(key, _)| *key == SettleKey::Batch) {
        return std::mem::take(pending).into_values().collect();
    }

    let mut batch: Vec<FileChangeEvent> = ready
        .into_iter()
        .filter_map(|(key, _)| match key {
            SettleKey::Path(path) => pending.remove(&path),
            SettleKey::Batch => None,
        })
        .collect();
    batch.sort_by(|a, b| a.path.cmp(&b.path));
    batch
}

/// Trust the disk over the event kind: notify can report a stale kind when
/// a file is replaced or removed mid-burst.
fn reconcile(kind: ChangeKind, exists: bool) -> ChangeKind {
    match (kind, exists) {
        (ChangeKind::Removed, true) => ChangeKind::Modified,
        (ChangeKind::Added | ChangeKind::Modified, false) => ChangeKind::Removed,
        (kind, _) => kind,
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
