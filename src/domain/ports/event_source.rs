//! EventSource port - the filesystem watch subsystem
//!
//! The watch loop only consumes a stream of `FileChangeEvent`s; the OS-level
//! mechanism lives behind this trait.

use std::path::Path;
use std::sync::mpsc::Receiver;

use crate::domain::entities::FileChangeEvent;
use crate::error::AssetSyncResult;

/// A subscription-based source of file change notifications
pub trait EventSource {
    /// Start delivering events for everything under `root` (recursively).
    fn subscribe(&mut self, root: &Path) -> AssetSyncResult<Receiver<FileChangeEvent>>;

    /// Stop delivering events. Calling this without a subscription is a no-op.
    fn unsubscribe(&mut self);
}

impl<T: EventSource + ?Sized> EventSource for &mut T {
    fn subscribe(&mut self, root: &Path) -> AssetSyncResult<Receiver<FileChangeEvent>> {
        (**self).subscribe(root)
    }

    fn unsubscribe(&mut self) {
        (**self).unsubscribe()
    }
}
