//! Persisted filter preferences.

use crate::domain::error::Result;
use crate::domain::FilterConfig;
use crate::storage::backend::{load_json, save_json, KeyValueStore};

/// Storage key holding the serialized [`FilterConfig`].
pub const FILTER_PREFERENCES_KEY: &str = "filterPreferences";

/// Owner of the current [`FilterConfig`].
///
/// Every mutation writes through to the backend before returning. A missing
/// or malformed stored value loads as the default without surfacing an error.
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
    filters: FilterConfig,
}

impl PreferenceStore {
    /// Loads preferences from `backend`, falling back to defaults.
    #[must_use]
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let filters = load_json(backend.as_ref(), FILTER_PREFERENCES_KEY).unwrap_or_default();
        tracing::debug!(filters = ?filters, "filter preferences loaded");
        Self { backend, filters }
    }

    #[must_use]
    pub const fn get(&self) -> &FilterConfig {
        &self.filters
    }

    /// Replaces the whole configuration and persists it.
    ///
    /// Values are accepted as given; no range clamping happens here. The
    /// in-memory value is updated even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn set(&mut self, filters: FilterConfig) -> Result<()> {
        self.filters = filters;
        save_json(self.backend.as_mut(), FILTER_PREFERENCES_KEY, &self.filters)
    }

    /// Applies `edit` to a copy of the current filters and stores the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn update(&mut self, edit: impl FnOnce(&mut FilterConfig)) -> Result<()> {
        let mut next = self.filters.clone();
        edit(&mut next);
        self.set(next)
    }

    /// Restores defaults and deletes the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend removal fails.
    pub fn reset(&mut self) -> Result<()> {
        tracing::debug!("resetting filter preferences");
        self.filters = FilterConfig::default();
        self.backend.remove(FILTER_PREFERENCES_KEY)
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("filters", &self.filters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortBy;
    use crate::storage::MemoryStore;

    fn store_over(backend: &MemoryStore) -> PreferenceStore {
        PreferenceStore::load(Box::new(backend.clone()))
    }

    #[test]
    fn set_survives_restart() {
        let backend = MemoryStore::new();
        let mut filters = FilterConfig {
            year_range: (1970, 1989),
            sort_by: SortBy::TitleDesc,
            ..FilterConfig::default()
        };
        filters.toggle_genre("Thriller");

        store_over(&backend).set(filters.clone()).unwrap();

        assert_eq!(store_over(&backend).get(), &filters);
    }

    #[test]
    fn set_accepts_out_of_range_values() {
        let backend = MemoryStore::new();
        let odd = FilterConfig {
            year_range: (2050, 1800),
            ..FilterConfig::default()
        };
        let mut store = store_over(&backend);
        store.set(odd.clone()).unwrap();
        assert_eq!(store.get(), &odd);
        assert_eq!(store_over(&backend).get(), &odd);
    }

    #[test]
    fn reset_restores_default_and_removes_key() {
        let backend = MemoryStore::new();
        let mut store = store_over(&backend);
        store.update(|f| f.cycle_sort()).unwrap();
        assert!(backend.contains(FILTER_PREFERENCES_KEY));

        store.reset().unwrap();
        assert_eq!(store.get(), &FilterConfig::default());
        assert!(!backend.contains(FILTER_PREFERENCES_KEY));
    }

    #[test]
    fn malformed_value_loads_default() {
        let mut backend = MemoryStore::new();
        backend.set(FILTER_PREFERENCES_KEY, "{\"yearRange\": oops").unwrap();
        assert_eq!(store_over(&backend).get(), &FilterConfig::default());
    }
}
