//! Watch Use Case
//!
//! Keeps the manifest and the generated artifact in sync with the assets
//! directory while it changes:
//! - file system notifications arrive through the `EventSource` port
//! - `EventFilter` drops irrelevant and ignored paths
//! - `Debouncer` coalesces bursts (shared window or one per path)
//! - settled changes edit the manifest, then regenerate the artifact once
//!
//! ## Usage
//!
//! ```ignore
//! let orchestrator = WatchOrchestrator::new(LocalFs::new(), options)?;
//! let stop = orchestrator.stop_handle();
//! ctrlc::set_handler(move || stop.stop())?;
//! orchestrator.start(NotifyEventSource::new(), |event| println!("{}", event.to_json()))?;
//! ```

mod debouncer;
mod event;
mod use_case;


pub use debouncer::{DebounceMode, Debouncer};
pub use event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};
pub use use_case::{StopHandle, WatchOrchestrator, WatchState};
