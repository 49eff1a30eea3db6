//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod event_source;
pub mod file_system;

pub use event_source::EventSource;
pub use file_system::{FileSystem, FsError, FsResult};
