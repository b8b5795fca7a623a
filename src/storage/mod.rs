//! Storage layer for persisted user preferences.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait abstraction
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: in-memory implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{PreferenceStore, THEME_KEY};
pub use json::JsonPreferenceStore;
pub use memory::MemoryPreferenceStore;
