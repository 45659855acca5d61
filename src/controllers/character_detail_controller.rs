// src/controllers/character_detail_controller.rs
//
// Detail Controller - one record by id

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use super::request_token::RequestTokens;
use super::state::DetailState;
use crate::domain::{Character, CharacterId};
use crate::error::AppResult;
use crate::events::{CharacterFetchFailed, EventBus, StaleFetchDiscarded};
use crate::integrations::CatalogApi;
use crate::services::FavoritesStore;

pub const DETAIL_FETCH_ERROR: &str = "Failed to fetch character details";

#[derive(Debug, Clone, Serialize)]
pub struct CharacterDetailSnapshot {
    pub requested_id: Option<CharacterId>,
    pub record: Option<Character>,
    pub state: DetailState,
    pub error: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Default)]
struct DetailInner {
    requested_id: Option<CharacterId>,
    record: Option<Character>,
    state: DetailState,
    error: Option<String>,
}

pub struct CharacterDetailController {
    catalog: Arc<dyn CatalogApi>,
    favorites: Arc<FavoritesStore>,
    event_bus: Arc<EventBus>,
    tokens: RequestTokens,
    inner: Mutex<DetailInner>,
}

impl CharacterDetailController {
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
            inner: Mutex::new(DetailInner::default()),
        }
    }

    fn inner(&self) -> MutexGuard<'_, DetailInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> CharacterDetailSnapshot {
        let inner = self.inner();
        let is_favorite = inner
            .record
            .as_ref()
            .map(|record| self.favorites.has(record.id))
            .unwrap_or(false);

        CharacterDetailSnapshot {
            requested_id: inner.requested_id,
            record: inner.record.clone(),
            state: inner.state,
            error: inner.error.clone(),
            is_favorite,
        }
    }

    /// Fetch the record for `id`. Any failure, 404 or otherwise, ends in
    /// `NotFound`.
    pub async fn load(&self, id: CharacterId) {
        let token = self.tokens.issue();
        {
            let mut inner = self.inner();
            inner.requested_id = Some(id);
            inner.state = DetailState::Loading;
        }

        let outcome = self.catalog.get_character(id).await;

        if !self.tokens.is_current(token) {
            let latest = self.tokens.latest();
            log::debug!("Discarding detail fetch #{} (latest #{})", token, latest);
            self.event_bus
                .emit(StaleFetchDiscarded::new(token, latest, "detail"));
            return;
        }

        match outcome {
            Ok(record) => {
                let mut inner = self.inner();
                inner.record = Some(record);
                inner.state = DetailState::Found;
                inner.error = None;
            }
            Err(e) => {
                log::warn!("Error fetching character {}: {}", id, e);
                {
                    let mut inner = self.inner();
                    inner.record = None;
                    inner.state = DetailState::NotFound;
                    inner.error = Some(DETAIL_FETCH_ERROR.to_string());
                }
                self.event_bus
                    .emit(CharacterFetchFailed::new(token, "detail", e.to_string()));
            }
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.inner()
            .record
            .as_ref()
            .map(|record| self.favorites.has(record.id))
            .unwrap_or(false)
    }

    /// Toggle the loaded record in the favorites. `None` when nothing is
    /// loaded; otherwise whether the record is now a favorite.
    pub fn toggle_favorite(&self) -> AppResult<Option<bool>> {
        let id = match self.inner().record.as_ref() {
            Some(record) => record.id,
            None => return Ok(None),
        };
        self.favorites.toggle(id).map(Some)
    }
}
