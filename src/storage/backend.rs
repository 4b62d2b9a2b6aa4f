//! Durable key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that the preference,
//! history, and appearance stores persist through. Values are opaque strings
//! (JSON documents in practice), keyed by short names such as
//! `"filterPreferences"`.
//!
//! # Design Philosophy
//!
//! The trait is deliberately tiny: get, set, remove. Each store owns its own
//! key and serializes its whole value on every mutation, so there is no
//! batching and no cross-key transaction.

use crate::domain::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Abstraction over durable string storage.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one file per key (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map for tests
pub trait KeyValueStore {
    /// Returns the stored value, or `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Reads and deserializes the value under `key`.
///
/// Absent keys, backend read failures, and unparsable values all yield
/// `None`; callers substitute their default.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored value");
            return None;
        }
        Err(e) => {
            tracing::debug!(key, error = %e, "failed to read stored value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}

/// Serializes `value` and writes it under `key`.
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails.
pub fn save_json<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).map_err(|e| {
        crate::domain::ReelfindError::Storage(format!("failed to serialize {key}: {e}"))
    })?;
    store.set(key, &json)
}
