// src/lib.rs
// CharHub - Local-first character catalog browser
//
// Architecture:
// - Domain-centric: records, favorites and query state live in the domain
// - Controllers own view state and decide which request to issue
// - Event-driven: favorites changes and fetch outcomes go through the event bus
// - Local-first: the only durable state is the favorites list
// - Application Layer: CLI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// CATALOG & CONTROLLERS
// ============================================================================

pub mod controllers;
pub mod integrations;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_favorite_set,
    // Character
    Character,
    CharacterGender,
    CharacterId,
    CharacterStatus,
    DomainError,
    // Favorites
    FavoriteSet,
    // Query
    FilterState,
    LocationRef,
    PageState,
    FAVORITES_KEY,
    FIRST_PAGE,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    CharacterFetchFailed,
    CharacterPageLoaded,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FavoriteAdded,
    FavoriteRemoved,
    StaleFetchDiscarded,
};

// ============================================================================
// PUBLIC API - Persistence
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{KeyValueRepository, SqliteKeyValueRepository};
pub use services::FavoritesStore;

// ============================================================================
// PUBLIC API - Catalog & Controllers
// ============================================================================

pub use config::AppConfig;
pub use controllers::{
    CharacterDetailController, CharacterListController, DetailState, FavoritesController,
    LoadState,
};
pub use integrations::{CatalogApi, CharacterPage, RemoteCatalogClient};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, Cli, Commands, ErrorResponse, ErrorType};
