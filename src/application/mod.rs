//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain text-editing or rendering rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ManifestService` - Read-modify-write of the manifest asset list
//! - `CodeGenerator` - Scan assets and write the Dart artifact
//! - `CheckUseCase` - Compare manifest, disk, and artifact without writing
//! - `WatchOrchestrator` - Keep all three in sync while files change

pub mod check;
pub mod generate;
pub mod manifest;
pub mod watch;

pub use check::{CheckReport, CheckUseCase, StaleArtifact};
pub use generate::{Artifact, CodeGenerator, GenerateReport};
pub use manifest::{ManifestAction, ManifestService};
pub use watch::{
    DebounceMode, Debouncer, StopHandle, WatchEvent, WatchOptions, WatchOrchestrator, WatchState,
};
