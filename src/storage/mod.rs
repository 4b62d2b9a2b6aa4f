//! Storage layer for persistent client state.
//!
//! Three small stores each own one value and mirror it to a durable
//! key-value backend on every mutation:
//!
//! | Store               | Key                   | Value                  |
//! |---------------------|-----------------------|------------------------|
//! | [`PreferenceStore`] | `"filterPreferences"` | `FilterConfig` as JSON |
//! | [`HistoryStore`]    | `"searchHistory"`     | `HistoryLog` as JSON   |
//! | [`AppearanceStore`] | `"darkMode"`          | JSON boolean           |
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait and JSON helpers
//! - `json`: file-per-key backend with atomic writes
//! - `memory`: in-process backend used by tests
//! - `preferences`, `history`, `appearance`: the stores

pub mod appearance;
pub mod backend;
pub mod history;
pub mod json;
pub mod memory;
pub mod preferences;

pub use appearance::{AppearanceStore, DARK_MODE_KEY};
pub use backend::{load_json, save_json, KeyValueStore};
pub use history::{HistoryStore, SEARCH_HISTORY_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::{PreferenceStore, FILTER_PREFERENCES_KEY};
