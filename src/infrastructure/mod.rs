//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `events/` - notify-backed event source
//! - `scanner` - Asset directory walk

pub mod events;
pub mod fs;
pub mod scanner;

// Re-export for convenience
pub use events::NotifyEventSource;
pub use fs::LocalFs;
pub use scanner::scan;
