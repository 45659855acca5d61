// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::controllers::{CharacterDetailController, CharacterListController, FavoritesController};
use crate::events::EventBus;
use crate::integrations::CatalogApi;
use crate::services::FavoritesStore;

/// Application state shared by every command.
/// All fields are Arc-wrapped for thread-safe sharing.
/// Controllers are built here from the injected collaborators.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub favorites: Arc<FavoritesStore>,
    pub list_controller: Arc<CharacterListController>,
    pub detail_controller: Arc<CharacterDetailController>,
    pub favorites_controller: Arc<FavoritesController>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        catalog: Arc<dyn CatalogApi>,
        favorites: Arc<FavoritesStore>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let list_controller = Arc::new(CharacterListController::new(
            catalog.clone(),
            favorites.clone(),
            event_bus.clone(),
            config.filter_debounce,
        ));
        let detail_controller = Arc::new(CharacterDetailController::new(
            catalog.clone(),
            favorites.clone(),
            event_bus.clone(),
        ));
        let favorites_controller = Arc::new(FavoritesController::new(
            catalog,
            favorites.clone(),
            event_bus.clone(),
        ));
        favorites_controller.register_event_handlers();

        Self {
            config,
            event_bus,
            favorites,
            list_controller,
            detail_controller,
            favorites_controller,
        }
    }
}
