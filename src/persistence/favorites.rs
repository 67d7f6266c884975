//! Favorites persistence adapter.
//!
//! Favorites live under a single storage key as a JSON array of bundles.
//! Read and write failures are logged and contained here; callers always get
//! a usable collection back.

use std::sync::{Mutex, MutexGuard};

use crate::error::PersistenceError;
use crate::models::ContentBundle;

use super::storage::LocalStorage;

/// Storage key holding the serialized favorites array
pub const FAVORITES_KEY: &str = "moodmuseFavorites";

/// Loads and saves the favorites collection
pub struct FavoritesStore {
    storage: Mutex<Box<dyn LocalStorage>>,
}

impl FavoritesStore {
    pub fn new(storage: Box<dyn LocalStorage>) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    /// Load favorites, substituting an empty collection on any failure
    pub fn load(&self) -> Vec<ContentBundle> {
        match self.try_load() {
            Ok(Some(favorites)) => {
                tracing::info!(count = favorites.len(), "loaded favorites");
                favorites
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "error loading favorites, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored favorites; failures are logged only
    pub fn save(&self, favorites: &[ContentBundle]) {
        if let Err(e) = self.try_save(favorites) {
            tracing::warn!(error = %e, "error saving favorites");
        }
    }

    // A panic mid-write leaves the backend itself usable
    fn lock_storage(&self) -> MutexGuard<'_, Box<dyn LocalStorage>> {
        self.storage.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn try_load(&self) -> Result<Option<Vec<ContentBundle>>, PersistenceError> {
        let raw = self.lock_storage().get_item(FAVORITES_KEY)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let parsed: Vec<ContentBundle> = serde_json::from_str(&raw)?;
        Ok(Some(dedupe(parsed)))
    }

    pub fn try_save(&self, favorites: &[ContentBundle]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(favorites)?;
        self.lock_storage().set_item(FAVORITES_KEY, &json)?;
        tracing::debug!(count = favorites.len(), "saved favorites");
        Ok(())
    }
}

/// Drop later entries whose identity repeats an earlier one
fn dedupe(bundles: Vec<ContentBundle>) -> Vec<ContentBundle> {
    let mut result: Vec<ContentBundle> = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        if !result.iter().any(|b| b.same_identity(&bundle)) {
            result.push(bundle);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::error::StorageError;
    use crate::models::MoodKey;
    use crate::persistence::storage::{MemoryStorage, SqliteStorage};

    /// Storage whose writes always fail
    struct ReadOnlyStorage(Option<String>);

    impl LocalStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.clone())
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn store_with(raw: &str) -> FavoritesStore {
        let mut storage = MemoryStorage::new();
        storage.set_item(FAVORITES_KEY, raw).unwrap();
        FavoritesStore::new(Box::new(storage))
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = FavoritesStore::new(Box::new(MemoryStorage::new()));
        assert!(store.try_load().unwrap().is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let store = store_with("{ not json");
        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let store = store_with(r#"{"quote": "q"}"#);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.sqlite3");
        let favorites = vec![
            catalog::lookup(MoodKey::Lonely),
            catalog::lookup(MoodKey::Happy),
        ];

        {
            let store = FavoritesStore::new(Box::new(SqliteStorage::open(&path).unwrap()));
            store.save(&favorites);
        }

        // Fresh session
        let store = FavoritesStore::new(Box::new(SqliteStorage::open(&path).unwrap()));
        assert_eq!(store.load(), favorites);
    }

    #[test]
    fn test_saved_layout_is_json_array() {
        let store = FavoritesStore::new(Box::new(MemoryStorage::new()));
        store.try_save(&[catalog::lookup(MoodKey::Sad)]).unwrap();

        let storage = store.storage.lock().unwrap();
        let raw = storage.get_item(FAVORITES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["quote"], "Tears are words that need to be written.");
        assert!(array[0]["backgroundImage"].is_string());
    }

    #[test]
    fn test_load_collapses_duplicates() {
        let sad = catalog::lookup(MoodKey::Sad);
        let mut sad_variant = sad.clone();
        sad_variant.songs.clear();
        let raw = serde_json::to_string(&vec![sad.clone(), sad_variant]).unwrap();

        let store = store_with(&raw);
        assert_eq!(store.load(), vec![sad]);
    }

    #[test]
    fn test_poisoned_lock_still_reads_and_writes() {
        let store = FavoritesStore::new(Box::new(MemoryStorage::new()));
        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _held = store.storage.lock().unwrap();
                    panic!("writer panicked");
                })
                .join();
        });
        assert!(store.storage.is_poisoned());

        let favorites = vec![catalog::lookup(MoodKey::Chill)];
        store.try_save(&favorites).unwrap();
        assert_eq!(store.try_load().unwrap(), Some(favorites));
    }

    #[test]
    fn test_save_failure_is_contained() {
        let store = FavoritesStore::new(Box::new(ReadOnlyStorage(None)));
        assert!(store.try_save(&[]).is_err());
        // Does not panic or propagate
        store.save(&[]);
    }
}
