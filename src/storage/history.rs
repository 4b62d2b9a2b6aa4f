//! Persisted search history.

use crate::domain::error::Result;
use crate::domain::{HistoryEntry, HistoryLog};
use crate::storage::backend::{load_json, save_json, KeyValueStore};
use chrono::{DateTime, Utc};

/// Storage key holding the serialized [`HistoryLog`].
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// Owner of the [`HistoryLog`].
///
/// The log is always most-recent-first with unique queries and at most five
/// entries. Each mutation persists the full log.
pub struct HistoryStore {
    backend: Box<dyn KeyValueStore>,
    log: HistoryLog,
}

impl HistoryStore {
    /// Loads history from `backend`. A missing or malformed value loads as an
    /// empty log; a stored log that breaks the ordering rules is normalized.
    #[must_use]
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let entries: Vec<HistoryEntry> =
            load_json(backend.as_ref(), SEARCH_HISTORY_KEY).unwrap_or_default();
        let log = HistoryLog::from_entries(entries);
        tracing::debug!(entries = log.len(), "search history loaded");
        Self { backend, log }
    }

    #[must_use]
    pub const fn get(&self) -> &HistoryLog {
        &self.log
    }

    /// Records `query` as the most recent search, timestamped now.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails. The in-memory log is
    /// updated regardless.
    pub fn add(&mut self, query: &str) -> Result<()> {
        self.add_at(query, Utc::now())
    }

    /// Records `query` with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn add_at(&mut self, query: &str, at: DateTime<Utc>) -> Result<()> {
        let _span = tracing::debug_span!("history_add", query).entered();
        self.log.push_front(HistoryEntry::new(query, at));
        save_json(self.backend.as_mut(), SEARCH_HISTORY_KEY, &self.log)
    }

    /// Empties the log and removes the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend removal fails.
    pub fn clear(&mut self) -> Result<()> {
        tracing::debug!("clearing search history");
        self.log.clear();
        self.backend.remove(SEARCH_HISTORY_KEY)
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, second).unwrap()
    }

    #[test]
    fn add_persists_and_reloads() {
        let backend = MemoryStore::new();
        let mut store = HistoryStore::load(Box::new(backend.clone()));
        store.add_at("alien", at(1)).unwrap();
        store.add_at("matrix", at(2)).unwrap();
        store.add_at("alien", at(3)).unwrap();

        let reloaded = HistoryStore::load(Box::new(backend));
        let entries = reloaded.get().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], HistoryEntry::new("alien", at(3)));
        assert_eq!(entries[1], HistoryEntry::new("matrix", at(2)));
    }

    #[test]
    fn never_exceeds_cap_or_duplicates() {
        let backend = MemoryStore::new();
        let mut store = HistoryStore::load(Box::new(backend));
        let queries = ["a", "b", "a", "c", "d", "b", "e", "f", "g", "a"];
        for (i, q) in queries.iter().enumerate() {
            store.add_at(q, at(u32::try_from(i).unwrap())).unwrap();

            let log = store.get();
            assert!(log.len() <= 5);
            let mut seen: Vec<&str> = log.queries().collect();
            assert_eq!(log.queries().next(), Some(*q));
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), log.len());
            let stamps: Vec<&str> = log.entries().iter().map(|e| e.timestamp.as_str()).collect();
            assert!(stamps.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn clear_removes_key() {
        let backend = MemoryStore::new();
        let mut store = HistoryStore::load(Box::new(backend.clone()));
        store.add("heat").unwrap();
        assert!(backend.contains(SEARCH_HISTORY_KEY));

        store.clear().unwrap();
        assert!(store.get().is_empty());
        assert!(!backend.contains(SEARCH_HISTORY_KEY));
    }

    #[test]
    fn malformed_value_loads_empty() {
        let mut backend = MemoryStore::new();
        backend.set(SEARCH_HISTORY_KEY, "{not json").unwrap();
        assert!(HistoryStore::load(Box::new(backend)).get().is_empty());
    }
}
