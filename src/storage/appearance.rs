//! Persisted light/dark appearance flag.

use crate::domain::error::Result;
use crate::storage::backend::{load_json, save_json, KeyValueStore};

/// Storage key holding the JSON boolean.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Owner of the dark-mode preference. Defaults to light.
pub struct AppearanceStore {
    backend: Box<dyn KeyValueStore>,
    dark: bool,
}

impl AppearanceStore {
    #[must_use]
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let dark = load_json(backend.as_ref(), DARK_MODE_KEY).unwrap_or(false);
        Self { backend, dark }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flips the flag and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn toggle(&mut self) -> Result<()> {
        self.dark = !self.dark;
        tracing::debug!(dark = self.dark, "appearance toggled");
        save_json(self.backend.as_mut(), DARK_MODE_KEY, &self.dark)
    }
}

impl std::fmt::Debug for AppearanceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceStore")
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn toggle_persists_boolean() {
        let backend = MemoryStore::new();
        let mut store = AppearanceStore::load(Box::new(backend.clone()));
        assert!(!store.is_dark());

        store.toggle().unwrap();
        assert_eq!(backend.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert!(AppearanceStore::load(Box::new(backend)).is_dark());
    }
}
