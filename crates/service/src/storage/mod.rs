//! Storage abstractions for service layer
//!
//! Contains the file-backed map store that persists a whole keyed
//! collection as one JSON object.

pub mod json_map_store;

pub use json_map_store::JsonMapStore;
