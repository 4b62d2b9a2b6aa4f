//! JSON file-based storage backend.
//!
//! Each key is stored as its own file, `<dir>/<key>.json`, holding the raw
//! value. Writes go through a temporary file and an atomic rename so a crash
//! never leaves a half-written value behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: one small file read per key, done once at startup
//! - **Write**: one small file write + rename per mutation
//! - **Best for**: a handful of keys that change on user interaction

use crate::domain::error::{ReelfindError, Result};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// Directory-backed key-value store.
///
/// Holds no in-memory cache, so several instances pointing at the same
/// directory observe each other's writes. Each store in the application gets
/// its own clone.
///
/// # Examples
///
/// ```no_run
/// use reelfind::storage::{JsonFileStore, KeyValueStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileStore::new(PathBuf::from("/tmp/reelfind"))?;
/// store.set("darkMode", "true")?;
/// assert_eq!(store.get("darkMode")?.as_deref(), Some("true"));
/// # Ok::<(), reelfind::ReelfindError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?dir, "initializing JSON file storage");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key to its file, rejecting keys that could escape the directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ReelfindError::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::trace!(key, bytes = contents.len(), "read stored value");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key).entered();

        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!(bytes = value.len(), "value saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "value removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
