// src/services/favorites_store.rs
//
// Favorites Store - the single owner of the persisted FavoriteSet
//
// CRITICAL RULES:
// - Every controller reads and writes favorites through this store
// - Persist first, then commit in memory, then emit
// - Never fetches catalog data

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::favorites::invariants::validate_favorite_id;
use crate::domain::{CharacterId, FavoriteSet, FAVORITES_KEY};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, FavoriteAdded, FavoriteRemoved};
use crate::repositories::{read_json, write_json, KeyValueRepository};

pub struct FavoritesStore {
    repo: Arc<dyn KeyValueRepository>,
    event_bus: Arc<EventBus>,
    favorites: RwLock<FavoriteSet>,
}

impl FavoritesStore {
    /// Read the persisted favorites. An absent key is an empty set; an
    /// undecodable value is logged and treated as empty.
    pub fn load(
        repo: Arc<dyn KeyValueRepository>,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        let favorites = match read_json::<Vec<CharacterId>>(repo.as_ref(), FAVORITES_KEY) {
            Ok(Some(ids)) => FavoriteSet::from_ids(ids.into_iter().filter(|id| *id != 0)),
            Ok(None) => FavoriteSet::new(),
            Err(AppError::Serialization(e)) => {
                log::warn!("Ignoring unreadable favorites entry: {}", e);
                FavoriteSet::new()
            }
            Err(e) => return Err(e),
        };

        log::debug!("Loaded {} favorites", favorites.len());

        Ok(Self {
            repo,
            event_bus,
            favorites: RwLock::new(favorites),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, FavoriteSet> {
        self.favorites
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, FavoriteSet> {
        self.favorites
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current favorites in insertion order
    pub fn ids(&self) -> Vec<CharacterId> {
        self.read().ids().to_vec()
    }

    pub fn snapshot(&self) -> FavoriteSet {
        self.read().clone()
    }

    pub fn has(&self, id: CharacterId) -> bool {
        self.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Add `id` if absent. Returns true when the set changed.
    pub fn add(&self, id: CharacterId) -> AppResult<bool> {
        validate_favorite_id(id)?;
        let count = self.apply(|set| set.add(id))?;
        if let Some(count) = count {
            self.event_bus.emit(FavoriteAdded::new(id, count));
        }
        Ok(count.is_some())
    }

    /// Remove `id` if present. Returns true when the set changed.
    pub fn remove(&self, id: CharacterId) -> AppResult<bool> {
        let count = self.apply(|set| set.remove(id))?;
        if let Some(count) = count {
            self.event_bus.emit(FavoriteRemoved::new(id, count));
        }
        Ok(count.is_some())
    }

    /// Add if absent, remove if present. Returns whether `id` is now a favorite.
    pub fn toggle(&self, id: CharacterId) -> AppResult<bool> {
        if self.has(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Run `change` on a copy, persist it if it reports a change, then
    /// commit. Returns the new size when something changed.
    fn apply<F>(&self, change: F) -> AppResult<Option<usize>>
    where
        F: FnOnce(&mut FavoriteSet) -> bool,
    {
        let mut current = self.write();
        let mut next = current.clone();
        if !change(&mut next) {
            return Ok(None);
        }

        write_json(self.repo.as_ref(), FAVORITES_KEY, &next)?;

        *current = next;
        Ok(Some(current.len()))
    }
}
