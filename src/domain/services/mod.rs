//! Domain Services
//!
//! Stateless services over manifest text and scanned assets.

pub mod dart;
pub mod document;
pub mod event_filter;
pub mod identifier;
pub mod manifest;
pub mod yaml_editor;

pub use dart::{render_dart, DartBinding, DartOptions};
pub use document::{resolve_section, DocNode, SectionLookup};
pub use event_filter::EventFilter;
pub use identifier::{derive_identifier, IdentifierAllocator};
pub use manifest::{declared_assets, has_asset, is_covered};
pub use yaml_editor::{add_list_item, remove_list_item};
