//! Mood state store.
//!
//! `MoodStore` owns the session state: selected mood, current content, the
//! loading/error flags and the favorites list. The view layer holds a clone
//! of the handle, reads snapshots, and changes state only through the
//! methods here.
//!
//! Every favorites mutation ends by calling `on_favorites_changed`, which
//! hands the new collection to the persistence adapter.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::GENERATION_FAILED_MESSAGE;
use crate::models::{ContentBundle, MoodKey, Phase};
use crate::persistence::FavoritesStore;
use crate::provider::ContentProvider;

/// Session state visible to the view layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodState {
    pub selected_mood: Option<MoodKey>,
    pub current_content: Option<ContentBundle>,
    pub loading: bool,
    pub error: Option<String>,
    pub favorites: Vec<ContentBundle>,
}

impl MoodState {
    /// Where the session sits in the selection/generation lifecycle
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Generating
        } else if self.selected_mood.is_none() {
            Phase::Idle
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.current_content.is_some() {
            Phase::Ready
        } else {
            Phase::MoodSelected
        }
    }

    pub fn is_favorite(&self, bundle: &ContentBundle) -> bool {
        self.favorites.iter().any(|f| f.same_identity(bundle))
    }
}

/// Shared handle to the session state
#[derive(Clone)]
pub struct MoodStore {
    state: Arc<Mutex<MoodState>>,
    provider: Arc<dyn ContentProvider>,
    favorites_store: Arc<FavoritesStore>,
}

/// Clears `loading` when dropped, whatever way generation ends
struct LoadingGuard {
    state: Arc<Mutex<MoodState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // A poisoned lock still holds valid state; release the flag regardless
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.loading = false;
    }
}

impl MoodStore {
    /// Create the store, loading favorites from persistence
    pub fn new(provider: Arc<dyn ContentProvider>, favorites_store: FavoritesStore) -> Self {
        let favorites = favorites_store.load();
        let store = Self {
            state: Arc::new(Mutex::new(MoodState {
                favorites,
                ..MoodState::default()
            })),
            provider,
            favorites_store: Arc::new(favorites_store),
        };

        // Initial write-back of the loaded collection
        {
            let state = store.lock();
            store.on_favorites_changed(&state.favorites);
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, MoodState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the whole state for rendering
    pub fn snapshot(&self) -> MoodState {
        self.lock().clone()
    }

    pub fn selected_mood(&self) -> Option<MoodKey> {
        self.lock().selected_mood
    }

    pub fn current_content(&self) -> Option<ContentBundle> {
        self.lock().current_content.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn favorites(&self) -> Vec<ContentBundle> {
        self.lock().favorites.clone()
    }

    pub fn is_favorite(&self, bundle: &ContentBundle) -> bool {
        self.lock().is_favorite(bundle)
    }

    /// Set the selected mood; content, loading and error are left alone
    pub fn select_mood(&self, mood: MoodKey) {
        tracing::debug!(%mood, "mood selected");
        self.lock().selected_mood = Some(mood);
    }

    /// Produce content for the selected mood.
    ///
    /// No-op when nothing is selected. Overlapping calls are not serialized:
    /// whichever finishes last decides `current_content` and `error`.
    pub async fn generate_content(&self) {
        let mood = {
            let mut state = self.lock();
            let Some(mood) = state.selected_mood else {
                return;
            };
            state.loading = true;
            state.error = None;
            mood
        };
        let _guard = LoadingGuard {
            state: Arc::clone(&self.state),
        };

        tracing::info!(%mood, "generating content");
        match self.provider.fetch(mood).await {
            Ok(bundle) => {
                self.lock().current_content = Some(bundle);
            }
            Err(e) => {
                tracing::error!(%mood, error = %e, "error generating content");
                self.lock().error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Append a bundle unless one with the same identity is already saved
    pub fn add_to_favorites(&self, bundle: &ContentBundle) {
        let mut state = self.lock();
        if state.is_favorite(bundle) {
            return;
        }
        state.favorites.push(bundle.clone());
        self.on_favorites_changed(&state.favorites);
    }

    /// Remove every saved bundle sharing this bundle's identity
    pub fn remove_from_favorites(&self, bundle: &ContentBundle) {
        let mut state = self.lock();
        let before = state.favorites.len();
        state.favorites.retain(|f| !f.same_identity(bundle));
        if state.favorites.len() != before {
            self.on_favorites_changed(&state.favorites);
        }
    }

    /// Add when absent, remove when present; returns whether it is now saved
    pub fn toggle_favorite(&self, bundle: &ContentBundle) -> bool {
        if self.is_favorite(bundle) {
            self.remove_from_favorites(bundle);
            false
        } else {
            self.add_to_favorites(bundle);
            true
        }
    }

    /// Persist the collection. Called with the state lock held so writes
    /// land in the same order as the mutations that produced them.
    fn on_favorites_changed(&self, favorites: &[ContentBundle]) {
        self.favorites_store.save(favorites);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::catalog;
    use crate::error::{GenerationError, StorageError};
    use crate::persistence::{LocalStorage, MemoryStorage, SqliteStorage};
    use crate::provider::SimulatedProvider;

    /// Provider that waits for a signal before answering
    struct GatedProvider {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl ContentProvider for GatedProvider {
        async fn fetch(&self, mood: MoodKey) -> Result<ContentBundle, GenerationError> {
            self.gate.notified().await;
            Ok(catalog::lookup(mood))
        }
    }

    /// Provider where the n-th fetch waits on the n-th gate
    struct SequencedProvider {
        gates: Vec<Arc<Notify>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContentProvider for SequencedProvider {
        async fn fetch(&self, mood: MoodKey) -> Result<ContentBundle, GenerationError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.gates[n].notified().await;
            Ok(catalog::lookup(mood))
        }
    }

    struct PanickingProvider;

    #[async_trait]
    impl ContentProvider for PanickingProvider {
        async fn fetch(&self, _mood: MoodKey) -> Result<ContentBundle, GenerationError> {
            panic!("provider blew up");
        }
    }

    /// Storage whose contents outlive the store that wrote them
    #[derive(Clone, Default)]
    struct SharedStorage(Arc<Mutex<HashMap<String, String>>>);

    impl LocalStorage for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn memory_favorites() -> FavoritesStore {
        FavoritesStore::new(Box::new(MemoryStorage::new()))
    }

    fn store() -> MoodStore {
        MoodStore::new(
            Arc::new(SimulatedProvider::new(Duration::ZERO)),
            memory_favorites(),
        )
    }

    fn offline_store() -> MoodStore {
        MoodStore::new(
            Arc::new(SimulatedProvider::offline(Duration::ZERO)),
            memory_favorites(),
        )
    }

    #[test]
    fn test_initial_state() {
        let store = store();
        let state = store.snapshot();
        assert_eq!(state, MoodState::default());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_select_mood_only_touches_selection() {
        let store = store();
        store.select_mood(MoodKey::Chill);
        let state = store.snapshot();
        assert_eq!(state.selected_mood, Some(MoodKey::Chill));
        assert_eq!(state.current_content, None);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.phase(), Phase::MoodSelected);
    }

    #[tokio::test]
    async fn test_generate_without_mood_is_noop() {
        let store = store();
        store.generate_content().await;
        assert_eq!(store.snapshot(), MoodState::default());
    }

    #[tokio::test]
    async fn test_generate_happy_scenario() {
        let store = store();
        store.select_mood(MoodKey::Happy);
        store.generate_content().await;

        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        let content = store.current_content().unwrap();
        assert_eq!(content, catalog::lookup(MoodKey::Happy));
        assert_eq!(
            content.quote,
            "Happiness is not something ready-made. It comes from your own actions."
        );
        assert_eq!(content.songs[0].title, "Happy");
        assert_eq!(content.songs[0].artist, "Pharrell Williams");
        assert_eq!(store.snapshot().phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_generate_failure_keeps_previous_content() {
        let store = offline_store();
        store.select_mood(MoodKey::Sad);
        store.generate_content().await;

        assert!(!store.is_loading());
        assert_eq!(store.current_content(), None);
        assert_eq!(store.error().as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(store.snapshot().phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn test_failure_after_success_leaves_content() {
        let favorites = memory_favorites();
        let ok = MoodStore::new(Arc::new(SimulatedProvider::new(Duration::ZERO)), favorites);
        ok.select_mood(MoodKey::Excited);
        ok.generate_content().await;

        // Same state, provider now failing
        let failing = MoodStore {
            provider: Arc::new(SimulatedProvider::offline(Duration::ZERO)),
            ..ok.clone()
        };
        failing.generate_content().await;

        assert!(!ok.is_loading());
        assert_eq!(
            ok.current_content(),
            Some(catalog::lookup(MoodKey::Excited))
        );
        assert!(!ok.error().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_retry_clears_error() {
        let store = offline_store();
        store.select_mood(MoodKey::Angry);
        store.generate_content().await;
        assert!(store.error().is_some());

        let retry = MoodStore {
            provider: Arc::new(SimulatedProvider::new(Duration::ZERO)),
            ..store.clone()
        };
        retry.generate_content().await;
        assert_eq!(store.error(), None);
        assert_eq!(store.snapshot().phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_loading_visible_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let store = MoodStore::new(
            Arc::new(GatedProvider {
                gate: Arc::clone(&gate),
            }),
            memory_favorites(),
        );
        store.select_mood(MoodKey::Lonely);

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.generate_content().await }
        });

        // Wait until the task has flipped the flag
        while !store.is_loading() {
            tokio::task::yield_now().await;
        }
        assert_eq!(store.snapshot().phase(), Phase::Generating);
        assert_eq!(store.current_content(), None);

        gate.notify_one();
        task.await.unwrap();
        assert!(!store.is_loading());
        assert_eq!(
            store.current_content(),
            Some(catalog::lookup(MoodKey::Lonely))
        );
    }

    #[tokio::test]
    async fn test_loading_released_when_provider_panics() {
        let store = MoodStore::new(Arc::new(PanickingProvider), memory_favorites());
        store.select_mood(MoodKey::Happy);

        let result = tokio::spawn({
            let store = store.clone();
            async move { store.generate_content().await }
        })
        .await;

        assert!(result.is_err());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_select_mood_after_ready_keeps_content() {
        let store = store();
        store.select_mood(MoodKey::Happy);
        store.generate_content().await;
        store.select_mood(MoodKey::Sad);

        assert_eq!(store.selected_mood(), Some(MoodKey::Sad));
        assert_eq!(
            store.current_content(),
            Some(catalog::lookup(MoodKey::Happy))
        );
    }

    #[tokio::test]
    async fn test_overlapping_generations_last_to_finish_wins() {
        let gates = vec![Arc::new(Notify::new()), Arc::new(Notify::new())];
        let provider = SequencedProvider {
            gates: gates.clone(),
            calls: AtomicUsize::new(0),
        };
        let provider = Arc::new(provider);
        let store = MoodStore::new(provider.clone(), memory_favorites());

        let spawn_generation = |store: &MoodStore| {
            let store = store.clone();
            tokio::spawn(async move { store.generate_content().await })
        };

        store.select_mood(MoodKey::Happy);
        let first = spawn_generation(&store);
        while provider.calls.load(Ordering::SeqCst) < 1 {
            tokio::task::yield_now().await;
        }

        store.select_mood(MoodKey::Sad);
        let second = spawn_generation(&store);
        while provider.calls.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }

        // Second request answers first
        gates[1].notify_one();
        second.await.unwrap();
        assert_eq!(store.current_content(), Some(catalog::lookup(MoodKey::Sad)));

        // The earlier request finishing later overwrites it
        gates[0].notify_one();
        first.await.unwrap();
        assert_eq!(
            store.current_content(),
            Some(catalog::lookup(MoodKey::Happy))
        );
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.selected_mood(), Some(MoodKey::Sad));
    }

    #[test]
    fn test_add_to_favorites_is_idempotent() {
        let store = store();
        let sad = catalog::lookup(MoodKey::Sad);
        store.add_to_favorites(&sad);
        store.add_to_favorites(&sad);
        assert_eq!(store.favorites().len(), 1);
    }

    #[test]
    fn test_add_uses_identity_not_full_equality() {
        let store = store();
        let sad = catalog::lookup(MoodKey::Sad);
        let mut variant = sad.clone();
        variant.songs.clear();
        variant.background_image = None;

        store.add_to_favorites(&sad);
        store.add_to_favorites(&variant);
        assert_eq!(store.favorites(), vec![sad]);
    }

    #[test]
    fn test_add_appends_in_order() {
        let store = store();
        let happy = catalog::lookup(MoodKey::Happy);
        let chill = catalog::lookup(MoodKey::Chill);
        store.add_to_favorites(&happy);
        store.add_to_favorites(&chill);
        assert_eq!(store.favorites(), vec![happy, chill]);
    }

    #[test]
    fn test_remove_then_add_round_trip() {
        let store = store();
        let happy = catalog::lookup(MoodKey::Happy);
        store.add_to_favorites(&happy);
        store.remove_from_favorites(&happy);
        assert!(store.favorites().is_empty());
        store.add_to_favorites(&happy);
        assert_eq!(store.favorites(), vec![happy]);
    }

    #[test]
    fn test_remove_matches_identity() {
        let store = store();
        let angry = catalog::lookup(MoodKey::Angry);
        let excited = catalog::lookup(MoodKey::Excited);
        store.add_to_favorites(&angry);
        store.add_to_favorites(&excited);

        let mut angry_variant = angry.clone();
        angry_variant.songs.truncate(1);
        store.remove_from_favorites(&angry_variant);
        assert_eq!(store.favorites(), vec![excited]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let store = store();
        store.remove_from_favorites(&catalog::lookup(MoodKey::Chill));
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_toggle_favorite() {
        let store = store();
        let chill = catalog::lookup(MoodKey::Chill);
        assert!(store.toggle_favorite(&chill));
        assert!(store.is_favorite(&chill));
        assert!(!store.toggle_favorite(&chill));
        assert!(!store.is_favorite(&chill));
    }

    #[test]
    fn test_concurrent_adds_persist_final_collection() {
        for _ in 0..50 {
            let storage = SharedStorage::default();
            let store = MoodStore::new(
                Arc::new(SimulatedProvider::new(Duration::ZERO)),
                FavoritesStore::new(Box::new(storage.clone())),
            );

            std::thread::scope(|s| {
                for i in 0..8 {
                    let store = store.clone();
                    s.spawn(move || {
                        let mut bundle = catalog::lookup(MoodKey::Happy);
                        bundle.quote = format!("q{i}");
                        store.add_to_favorites(&bundle);
                    });
                }
            });

            let persisted = FavoritesStore::new(Box::new(storage)).load();
            assert_eq!(persisted.len(), 8);
            assert_eq!(persisted, store.favorites());
        }
    }

    #[test]
    fn test_favorites_persist_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.sqlite3");
        let open = || {
            MoodStore::new(
                Arc::new(SimulatedProvider::new(Duration::ZERO)),
                FavoritesStore::new(Box::new(SqliteStorage::open(&path).unwrap())),
            )
        };

        let happy = catalog::lookup(MoodKey::Happy);
        let sad = catalog::lookup(MoodKey::Sad);
        {
            let store = open();
            store.add_to_favorites(&happy);
            store.add_to_favorites(&sad);
        }

        let store = open();
        assert_eq!(store.favorites(), vec![happy.clone(), sad]);

        store.remove_from_favorites(&happy);
        drop(store);
        assert_eq!(open().favorites().len(), 1);
    }
}
