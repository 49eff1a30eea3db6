//! Property tests for assetsync.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics", "idempotent" and "round-trips".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/yaml_editor.rs"]
mod yaml_editor;

#[path = "properties/identifier.rs"]
mod identifier;

#[path = "properties/debouncer.rs"]
mod debouncer;

#[path = "properties/asset_path.rs"]
mod asset_path;
