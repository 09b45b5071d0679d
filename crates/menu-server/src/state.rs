use menu_core::config::Config;
use menu_core::MealStore;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared application state passed to all route handlers.
///
/// No catalog lives here: every request opens its own `MealStore` so edits
/// made through the CLI show up on the next request. Mutations inside this
/// process are serialized by `write_lock`; other processes still race, and
/// the last write wins.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub config: Arc<Config>,
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self {
            root,
            config: Arc::new(config),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open a request-scoped store.
    pub fn open_store(&self) -> menu_core::Result<MealStore> {
        self.config.open_store(&self.root)
    }

    /// Hold for the whole load → edit → save sequence.
    pub fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_stores_root() {
        let state = AppState::new(PathBuf::from("/tmp/kitchen"), Config::default());
        assert_eq!(state.root, PathBuf::from("/tmp/kitchen"));
    }

    #[test]
    fn open_store_uses_configured_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            catalog_file: PathBuf::from("data/meals.json"),
            ..Config::default()
        };
        let state = AppState::new(dir.path().to_path_buf(), config);
        let store = state.open_store().unwrap();
        assert_eq!(store.path(), dir.path().join("data/meals.json"));
    }
}
