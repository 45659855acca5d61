// src/controllers/favorites_controller.rs
//
// Favorites Controller - every favorited record in one batch
//
// RULES:
// - One batch request for the whole FavoriteSet, no cap
// - A failed batch exposes no partial list
// - Removing through this controller updates the list without refetching

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use super::request_token::RequestTokens;
use super::state::LoadState;
use crate::domain::{Character, CharacterId};
use crate::error::AppResult;
use crate::events::{
    CharacterFetchFailed, EventBus, FavoriteAdded, FavoriteRemoved, StaleFetchDiscarded,
};
use crate::integrations::CatalogApi;
use crate::services::FavoritesStore;

pub const FAVORITES_FETCH_ERROR: &str = "Failed to fetch favorite characters";

#[derive(Debug, Clone, Serialize)]
pub struct FavoritesSnapshot {
    pub records: Vec<Character>,
    pub state: LoadState,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct FavoritesInner {
    records: Vec<Character>,
    state: LoadState,
    error: Option<String>,
}

pub struct FavoritesController {
    catalog: Arc<dyn CatalogApi>,
    favorites: Arc<FavoritesStore>,
    event_bus: Arc<EventBus>,
    tokens: RequestTokens,
    /// Set when the FavoriteSet changed outside this controller
    stale: Arc<AtomicBool>,
    inner: Mutex<FavoritesInner>,
}

impl FavoritesController {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        favorites: Arc<FavoritesStore>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            event_bus,
            tokens: RequestTokens::new(),
            stale: Arc::new(AtomicBool::new(false)),
            inner: Mutex::new(FavoritesInner::default()),
        }
    }

    fn inner(&self) -> MutexGuard<'_, FavoritesInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mark the exposed list stale whenever a favorite is added or removed
    pub fn register_event_handlers(&self) {
        let stale = self.stale.clone();
        self.event_bus.subscribe::<FavoriteAdded, _>(move |event| {
            log::debug!("Favorite {} added; favorites list is stale", event.character_id);
            stale.store(true, Ordering::SeqCst);
        });

        let stale = self.stale.clone();
        self.event_bus.subscribe::<FavoriteRemoved, _>(move |event| {
            log::debug!("Favorite {} removed; favorites list is stale", event.character_id);
            stale.store(true, Ordering::SeqCst);
        });
    }

    pub fn snapshot(&self) -> FavoritesSnapshot {
        let inner = self.inner();
        FavoritesSnapshot {
            records: inner.records.clone(),
            state: inner.state,
            error: inner.error.clone(),
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale.load(Ordering::SeqCst)
    }

    /// Fetch every favorited record
    pub async fn refresh(&self) {
        let token = self.tokens.issue();
        let ids = self.favorites.ids();

        // cleared before the fetch so changes made while it runs are kept
        self.stale.store(false, Ordering::SeqCst);
        self.inner().state = LoadState::Loading;

        let outcome = if ids.is_empty() {
            Ok(Vec::new())
        } else {
            log::debug!("Fetching {} favorite characters", ids.len());
            self.catalog.get_characters(&ids).await
        };

        if !self.tokens.is_current(token) {
            let latest = self.tokens.latest();
            self.event_bus
                .emit(StaleFetchDiscarded::new(token, latest, "favorites"));
            return;
        }

        match outcome {
            Ok(mut records) => {
                // ids removed while the batch was in flight
                records.retain(|record| self.favorites.has(record.id));

                let mut inner = self.inner();
                inner.records = records;
                inner.state = LoadState::Loaded;
                inner.error = None;
            }
            Err(e) => {
                log::warn!("Error fetching favorite characters: {}", e);
                {
                    let mut inner = self.inner();
                    inner.records.clear();
                    inner.state = LoadState::Errored;
                    inner.error = Some(FAVORITES_FETCH_ERROR.to_string());
                }
                self.event_bus
                    .emit(CharacterFetchFailed::new(token, "favorites", e.to_string()));
            }
        }
    }

    /// Refetch only if the FavoriteSet changed since the last fetch or
    /// nothing was fetched yet. Returns whether a fetch ran.
    pub async fn sync(&self) -> bool {
        let never_fetched = self.inner().state == LoadState::Idle;
        if !never_fetched && !self.is_stale() {
            return false;
        }
        self.refresh().await;
        true
    }

    /// Remove `id` from the favorites and drop it from the exposed list
    pub fn remove_favorite(&self, id: CharacterId) -> AppResult<bool> {
        let was_stale = self.is_stale();
        let removed = self.favorites.remove(id)?;

        self.inner().records.retain(|record| record.id != id);
        // our own removal is already reflected in the list
        self.stale.store(was_stale, Ordering::SeqCst);

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::{favorites_store, GatedCatalog};
    use crate::error::AppError;
    use crate::integrations::catalog::schema::fixtures::characters;
    use crate::integrations::catalog::MockCatalogApi;

    fn controller(catalog: MockCatalogApi, favorites: &[CharacterId]) -> FavoritesController {
        let (store, bus) = favorites_store(favorites);
        let controller = FavoritesController::new(Arc::new(catalog), store, bus);
        controller.register_event_handlers();
        controller
    }

    #[tokio::test]
    async fn test_empty_favorites_makes_no_call() {
        let mut catalog = MockCatalogApi::new();
        catalog.expect_get_characters().times(0);

        let controller = controller(catalog, &[]);
        controller.refresh().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, LoadState::Loaded);
        assert!(snapshot.records.is_empty());
    }

    #[tokio::test]
    async fn test_fetches_all_ids_without_cap() {
        let mut catalog = MockCatalogApi::new();
        catalog
            .expect_get_characters()
            .withf(|ids| ids.len() == 25)
            .times(1)
            .returning(|ids| Ok(characters(ids.iter().copied())));

        let favorites: Vec<CharacterId> = (1..=25).collect();
        let controller = controller(catalog, &favorites);
        controller.refresh().await;

        assert_eq!(controller.snapshot().records.len(), 25);
    }

    #[tokio::test]
    async fn test_failure_exposes_no_partial_list() {
        let mut catalog = MockCatalogApi::new();
        catalog
            .expect_get_characters()
            .times(1)
            .returning(|_| Err(AppError::Http { status: 502 }));

        let controller = controller(catalog, &[1, 2]);
        controller.refresh().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, LoadState::Errored);
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.error.as_deref(), Some(FAVORITES_FETCH_ERROR));
    }

    #[tokio::test]
    async fn test_remove_favorite_does_not_refetch() {
        let mut catalog = MockCatalogApi::new();
        catalog
            .expect_get_characters()
            .times(1)
            .returning(|ids| Ok(characters(ids.iter().copied())));

        let (store, bus) = favorites_store(&[1, 2, 3]);
        let controller = FavoritesController::new(Arc::new(catalog), store.clone(), bus);
        controller.register_event_handlers();
        controller.refresh().await;

        assert!(controller.remove_favorite(2).unwrap());

        let ids: Vec<CharacterId> = controller.snapshot().records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!store.has(2));
        assert!(!controller.sync().await);
    }

    #[tokio::test]
    async fn test_outside_change_marks_stale() {
        let mut catalog = MockCatalogApi::new();
        catalog
            .expect_get_characters()
            .times(2)
            .returning(|ids| Ok(characters(ids.iter().copied())));

        let (store, bus) = favorites_store(&[1]);
        let controller = FavoritesController::new(Arc::new(catalog), store.clone(), bus);
        controller.register_event_handlers();

        assert!(controller.sync().await);
        assert!(!controller.sync().await);

        store.add(8).unwrap();
        assert!(controller.is_stale());
        assert!(controller.sync().await);
        assert_eq!(controller.snapshot().records.len(), 2);
    }

    #[tokio::test]
    async fn test_removal_during_fetch_is_not_undone() {
        let catalog = GatedCatalog::new();
        let release = catalog.gate_batch();

        let (store, bus) = favorites_store(&[1, 2, 3]);
        let controller = FavoritesController::new(catalog, store.clone(), bus);
        controller.register_event_handlers();

        let fetch = controller.refresh();
        let remove = async {
            tokio::task::yield_now().await;
            assert!(controller.remove_favorite(2).unwrap());
            release.send(characters([1, 2, 3])).unwrap();
        };
        tokio::join!(fetch, remove);

        let ids: Vec<CharacterId> = controller.snapshot().records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.ids(), vec![1, 3]);
        assert!(!controller.sync().await);
    }

    #[tokio::test]
    async fn test_superseded_refresh_is_discarded() {
        let catalog = GatedCatalog::new();
        let slow = catalog.gate_batch();
        let fast = catalog.gate_batch();

        let (store, bus) = favorites_store(&[1, 2]);
        let controller = FavoritesController::new(catalog, store, bus.clone());

        let first = controller.refresh();
        let second = async {
            tokio::task::yield_now().await;
            fast.send(characters([1, 2])).unwrap();
            controller.refresh().await;
            slow.send(characters([1])).unwrap();
        };
        tokio::join!(first, second);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, LoadState::Loaded);
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(bus.emitted_types(), vec!["StaleFetchDiscarded"]);
    }
}
