//! Domain Layer
//!
//! Pure asset-sync logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Scanned assets and file change events
//! - `value_objects/` - Asset paths, ignore patterns, config warnings
//! - `services/` - Document model, YAML editor, manifest store, event filter,
//!   identifier derivation, Dart rendering
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Text in, text out** - Manifest edits are pure transforms
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
