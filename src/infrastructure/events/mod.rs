//! Event Source Implementations
//!
//! Provides concrete implementations of the EventSource port:
//! - NotifyEventSource: OS file notifications via `notify`

mod notify_source;

pub use notify_source::NotifyEventSource;
