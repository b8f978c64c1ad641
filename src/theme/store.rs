//! Active theme selection and its durable persistence

use std::path::PathBuf;
use std::sync::Arc;

use super::{Theme, ThemeCatalog};
use crate::config::{Config, ConfigError};

/// Durable storage for the chosen theme id.
pub trait ThemePersistence {
    /// The persisted id, if any. Validity is checked by the caller.
    fn load(&self) -> Option<String>;

    /// Persist `id` for future sessions.
    fn save(&mut self, id: &str) -> Result<(), ConfigError>;
}

/// In-memory persistence for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemePersistence {
    id: Option<String>,
}

impl MemoryThemePersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl ThemePersistence for MemoryThemePersistence {
    fn load(&self) -> Option<String> {
        self.id.clone()
    }

    fn save(&mut self, id: &str) -> Result<(), ConfigError> {
        self.id = Some(id.to_string());
        Ok(())
    }
}

/// Persists the theme id as `[theme] id` in `config.toml`.
#[derive(Debug, Clone)]
pub struct ConfigThemePersistence {
    path: PathBuf,
}

impl ConfigThemePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemePersistence for ConfigThemePersistence {
    fn load(&self) -> Option<String> {
        match Config::load_from(&self.path) {
            Ok(config) => Some(config.theme.id),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read theme from config");
                None
            }
        }
    }

    fn save(&mut self, id: &str) -> Result<(), ConfigError> {
        Config::set_theme_id(&self.path, id)
    }
}

/// Holds the active theme.
///
/// The current id always resolves to a catalog entry. Every change bumps
/// `revision` so the UI knows to re-render prompt and colors.
pub struct ThemeStore {
    catalog: Arc<ThemeCatalog>,
    current: String,
    persistence: Box<dyn ThemePersistence>,
    revision: u64,
}

impl ThemeStore {
    /// Create a store, restoring the persisted theme when it is valid.
    pub fn load(catalog: Arc<ThemeCatalog>, persistence: Box<dyn ThemePersistence>) -> Self {
        let current = resolve_persisted(&catalog, persistence.as_ref());
        Self {
            catalog,
            current,
            persistence,
            revision: 0,
        }
    }

    /// Re-read the persisted theme (hard boot).
    pub fn reload(&mut self) {
        let id = resolve_persisted(&self.catalog, self.persistence.as_ref());
        if id != self.current {
            self.current = id;
            self.revision += 1;
        }
    }

    pub fn current_theme(&self) -> &Theme {
        self.catalog.resolve(&self.current)
    }

    /// Ids of every selectable theme, in catalog order.
    pub fn theme_list(&self) -> Vec<&str> {
        self.catalog.ids()
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn contains(&self, id: &str) -> bool {
        self.catalog.contains(id)
    }

    /// Switch to `id` and persist it.
    ///
    /// Unknown ids are a no-op that leaves both the current theme and the
    /// persisted value untouched. Returns whether the theme was applied.
    pub fn change_theme(&mut self, id: &str) -> bool {
        if !self.apply(id) {
            return false;
        }
        if let Err(e) = self.persistence.save(id) {
            tracing::warn!(theme = id, error = %e, "failed to persist theme");
        }
        true
    }

    /// Switch to `id` for this session only.
    pub fn apply(&mut self, id: &str) -> bool {
        let Some(theme) = self.catalog.get(id) else {
            return false;
        };
        tracing::info!(theme = id, name = %theme.name, "applying theme");
        self.current = id.to_string();
        self.revision += 1;
        true
    }

    /// Counter bumped on every theme change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

fn resolve_persisted(catalog: &ThemeCatalog, persistence: &dyn ThemePersistence) -> String {
    match persistence.load() {
        Some(id) if catalog.contains(&id) => id,
        Some(id) => {
            tracing::warn!(theme = %id, "persisted theme is unknown, using default");
            catalog.default_theme().id.clone()
        }
        None => catalog.default_theme().id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Persistence that shares its saved id with the test.
    #[derive(Clone, Default)]
    struct SharedPersistence(Rc<RefCell<Option<String>>>);

    impl ThemePersistence for SharedPersistence {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&mut self, id: &str) -> Result<(), ConfigError> {
            *self.0.borrow_mut() = Some(id.to_string());
            Ok(())
        }
    }

    fn store_with(persisted: Option<&str>) -> (ThemeStore, SharedPersistence) {
        let shared = SharedPersistence::default();
        *shared.0.borrow_mut() = persisted.map(str::to_string);
        let store = ThemeStore::load(ThemeCatalog::builtin(), Box::new(shared.clone()));
        (store, shared)
    }

    #[test]
    fn defaults_without_persisted_value() {
        let (store, _) = store_with(None);
        assert_eq!(store.current_theme().id, "dark");
    }

    #[test]
    fn restores_valid_persisted_theme() {
        let (store, _) = store_with(Some("green"));
        assert_eq!(store.current_theme().id, "green");
        assert_eq!(store.current_theme().prompt, ">");
    }

    #[test]
    fn unknown_persisted_theme_falls_back_to_default() {
        let (store, _) = store_with(Some("neon"));
        assert_eq!(store.current_theme().id, "dark");
    }

    #[test]
    fn change_theme_applies_and_persists() {
        let (mut store, shared) = store_with(None);
        assert!(store.change_theme("amber"));
        assert_eq!(store.current_theme().id, "amber");
        assert_eq!(shared.load().as_deref(), Some("amber"));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn change_theme_unknown_is_noop() {
        let (mut store, shared) = store_with(Some("green"));
        assert!(!store.change_theme("nonexistent"));
        assert_eq!(store.current_theme().id, "green");
        assert_eq!(shared.load().as_deref(), Some("green"));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn apply_does_not_persist() {
        let (mut store, shared) = store_with(None);
        assert!(store.apply("light"));
        assert_eq!(store.current_theme().id, "light");
        assert_eq!(shared.load(), None);
    }

    #[test]
    fn reload_restores_persisted_theme() {
        let (mut store, _) = store_with(Some("green"));
        store.apply("light");
        store.reload();
        assert_eq!(store.current_theme().id, "green");
    }

    #[test]
    fn theme_list_is_catalog_order() {
        let (store, _) = store_with(None);
        assert_eq!(
            store.theme_list(),
            vec![
                "dark",
                "green",
                "amber",
                "classic",
                "light",
                "solarized",
                "chicago",
                "synthwave",
                "ubuntu"
            ]
        );
    }

    #[test]
    fn memory_persistence_round_trip() {
        let mut persistence = MemoryThemePersistence::new();
        assert_eq!(persistence.load(), None);
        persistence.save("green").unwrap();
        assert_eq!(persistence.saved(), Some("green"));
    }

    #[test]
    fn config_persistence_reports_io_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let mut persistence = ConfigThemePersistence::new(blocker.join("config.toml"));
        let err = persistence.save("green").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn failed_save_still_applies_theme() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let persistence = ConfigThemePersistence::new(blocker.join("config.toml"));
        let mut store = ThemeStore::load(ThemeCatalog::builtin(), Box::new(persistence));
        assert!(store.change_theme("amber"));
        assert_eq!(store.current_theme().id, "amber");
    }
}
