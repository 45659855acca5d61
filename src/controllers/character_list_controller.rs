// src/controllers/character_list_controller.rs
//
// List Controller - paginated, filterable character listing
//
// RULES:
// - Every trigger (filters, page, favorites-only) issues exactly one fetch
// - Only the most recently started fetch may update the snapshot
// - Toggling a favorite never refetches; it only changes membership

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;

use super::request_token::RequestTokens;
use super::state::LoadState;
use crate::domain::{
    Character, CharacterId, DomainError, FavoriteSet, FilterState, PageState, FIRST_PAGE,
};
use crate::error::AppResult;
use crate::events::{CharacterFetchFailed, CharacterPageLoaded, EventBus, StaleFetchDiscarded};
use crate::integrations::{CatalogApi, CharacterPage};
use crate::services::FavoritesStore;

/// Favorites-only mode fetches at most this many ids, in FavoriteSet order
pub const FAVORITES_ONLY_LIMIT: usize = 20;

pub const LIST_FETCH_ERROR: &str = "Failed to fetch characters. Please try again.";

/// What a trigger should fetch, decided from the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Favorites-only with no favorites: nothing to request
    Empty,
    /// Favorites-only: batch request for the first ids.
    /// `total_results` is the full FavoriteSet size, not the fetched count.
    Favorites {
        ids: Vec<CharacterId>,
        total_results: u32,
    },
    Listing { page: u32, filters: FilterState },
}

pub fn plan_fetch(
    favorites_only: bool,
    favorites: &FavoriteSet,
    page: u32,
    filters: &FilterState,
) -> FetchPlan {
    if !favorites_only {
        return FetchPlan::Listing {
            page,
            filters: filters.clone(),
        };
    }
    if favorites.is_empty() {
        return FetchPlan::Empty;
    }
    FetchPlan::Favorites {
        ids: favorites.first(FAVORITES_ONLY_LIMIT).to_vec(),
        total_results: u32::try_from(favorites.len()).unwrap_or(u32::MAX),
    }
}

/// Everything the presentation layer needs to render the listing
#[derive(Debug, Clone, Serialize)]
pub struct CharacterListSnapshot {
    pub records: Vec<Character>,
    pub page: PageState,
    pub filters: FilterState,
    pub favorites_only: bool,
    pub state: LoadState,
    pub error: Option<String>,
    pub favorite_ids: Vec<CharacterId>,
}

impl CharacterListSnapshot {
    pub fn is_favorite(&self, id: CharacterId) -> bool {
        self.favorite_ids.contains(&id)
    }
}

#[derive(Debug, Default)]
struct ListState {
    records: Vec<Character>,
    page: PageState,
    filters: FilterState,
    favorites_only: bool,
    load_state: LoadState,
    error: Option<String>,
}

pub struct CharacterListController {
    catalog: Arc<dyn CatalogApi>,
    favorites: Arc<FavoritesStore>,
    event_bus: Arc<EventBus>,
    tokens: RequestTokens,
    debounce: Duration,
    debounce_generation: AtomicU64,
    state: Mutex<ListState>,
}

impl CharacterListController {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        favorites: Arc<FavoritesStore>,
        event_bus: Arc<EventBus>,
        debounce: Duration,
    ) -> Self {
        Self {
            catalog,
            favorites,
            event_bus,
            tokens: RequestTokens::new(),
            debounce,
            debounce_generation: AtomicU64::new(0),
            state: Mutex::new(ListState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> CharacterListSnapshot {
        let state = self.state();
        CharacterListSnapshot {
            records: state.records.clone(),
            page: state.page,
            filters: state.filters.clone(),
            favorites_only: state.favorites_only,
            state: state.load_state,
            error: state.error.clone(),
            favorite_ids: self.favorites.ids(),
        }
    }

    pub fn is_favorite(&self, id: CharacterId) -> bool {
        self.favorites.has(id)
    }

    pub fn has_active_filters(&self) -> bool {
        self.state().filters.has_active_filters()
    }

    /// Fetch with the current page, filters and mode
    pub async fn refresh(&self) -> AppResult<()> {
        self.fetch_current().await
    }

    /// Re-run the last trigger. Page, filters and mode survive an error.
    pub async fn retry(&self) -> AppResult<()> {
        self.fetch_current().await
    }

    /// Replace the filters and go back to the first page
    pub async fn set_filters(&self, filters: FilterState) -> AppResult<()> {
        {
            let mut state = self.state();
            state.filters = filters;
            state.page = state.page.at_page(FIRST_PAGE);
        }
        self.fetch_current().await
    }

    pub async fn clear_filters(&self) -> AppResult<()> {
        self.set_filters(FilterState::default()).await
    }

    /// `set_filters` after a trailing quiet period. A newer call made
    /// during the wait supersedes this one, which then returns `false`
    /// without fetching.
    pub async fn set_filters_debounced(&self, filters: FilterState) -> AppResult<bool> {
        let generation = self.debounce_generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;

        if self.debounce_generation.load(Ordering::SeqCst) != generation {
            return Ok(false);
        }
        self.set_filters(filters).await?;
        Ok(true)
    }

    /// Move to page `page` (1-based). Upper bound is the caller's concern.
    pub async fn set_page(&self, page: u32) -> AppResult<()> {
        if page < FIRST_PAGE {
            return Err(DomainError::InvalidPage(page).into());
        }
        {
            let mut state = self.state();
            state.page = state.page.at_page(page);
        }
        self.fetch_current().await
    }

    /// Set page, filters and mode together with a single fetch
    pub async fn open(
        &self,
        filters: FilterState,
        page: u32,
        favorites_only: bool,
    ) -> AppResult<()> {
        if page < FIRST_PAGE {
            return Err(DomainError::InvalidPage(page).into());
        }
        {
            let mut state = self.state();
            state.filters = filters;
            state.page = state.page.at_page(page);
            state.favorites_only = favorites_only;
        }
        self.fetch_current().await
    }

    pub async fn toggle_favorites_only(&self) -> AppResult<()> {
        {
            let mut state = self.state();
            state.favorites_only = !state.favorites_only;
            state.page = state.page.at_page(FIRST_PAGE);
        }
        self.fetch_current().await
    }

    /// Add or remove `id` from the favorites. The displayed page is not
    /// refetched. Returns whether `id` is now a favorite.
    pub fn toggle_favorite(&self, id: CharacterId) -> AppResult<bool> {
        self.favorites.toggle(id)
    }

    async fn fetch_current(&self) -> AppResult<()> {
        let token = self.tokens.issue();

        let (plan, favorites_only) = {
            let mut state = self.state();
            state.load_state = LoadState::Loading;
            let favorites = self.favorites.snapshot();
            let plan = plan_fetch(
                state.favorites_only,
                &favorites,
                state.page.current_page,
                &state.filters,
            );
            (plan, state.favorites_only)
        };

        log::debug!("List fetch #{}: {:?}", token, plan);
        let outcome = self.execute(plan).await;

        if !self.tokens.is_current(token) {
            let latest = self.tokens.latest();
            log::debug!("Discarding list fetch #{} (latest #{})", token, latest);
            self.event_bus
                .emit(StaleFetchDiscarded::new(token, latest, "list"));
            return Ok(());
        }

        match outcome {
            Ok(result) => {
                let event = {
                    let mut state = self.state();
                    state.page = state
                        .page
                        .with_totals(result.total_pages, result.total_results);
                    state.records = result.records;
                    state.load_state = LoadState::Loaded;
                    state.error = None;

                    log::info!(
                        "Loaded page {} ({} records, {} pages, {} results)",
                        state.page.current_page,
                        state.records.len(),
                        state.page.total_pages,
                        state.page.total_results
                    );

                    CharacterPageLoaded::new(
                        token,
                        state.page.current_page,
                        state.records.len(),
                        state.page.total_pages,
                        state.page.total_results,
                        favorites_only,
                    )
                };
                self.event_bus.emit(event);
            }
            Err(e) => {
                log::warn!("Error fetching characters: {}", e);
                {
                    let mut state = self.state();
                    state.records.clear();
                    state.load_state = LoadState::Errored;
                    state.error = Some(LIST_FETCH_ERROR.to_string());
                }
                self.event_bus
                    .emit(CharacterFetchFailed::new(token, "list", e.to_string()));
            }
        }

        Ok(())
    }

    async fn execute(&self, plan: FetchPlan) -> AppResult<CharacterPage> {
        match plan {
            FetchPlan::Empty => Ok(CharacterPage::empty()),
            FetchPlan::Favorites { ids, total_results } => {
                let records = self.catalog.get_characters(&ids).await?;
                Ok(CharacterPage {
                    records,
                    total_pages: 1,
                    total_results,
                })
            }
            FetchPlan::Listing { page, filters } => {
                self.catalog.list_characters(page, &filters).await
            }
        }
    }
}
