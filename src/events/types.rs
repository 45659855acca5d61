// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CharacterId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// FAVORITES EVENTS
// ============================================================================

/// Emitted after an id was appended to the FavoriteSet and persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_id: CharacterId,
    pub favorite_count: usize,
}

impl FavoriteAdded {
    pub fn new(character_id: CharacterId, favorite_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_id,
            favorite_count,
        }
    }
}

impl_domain_event!(FavoriteAdded);

/// Emitted after an id was removed from the FavoriteSet and persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub character_id: CharacterId,
    pub favorite_count: usize,
}

impl FavoriteRemoved {
    pub fn new(character_id: CharacterId, favorite_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            character_id,
            favorite_count,
        }
    }
}

impl_domain_event!(FavoriteRemoved);

// ============================================================================
// CATALOG FETCH EVENTS
// ============================================================================

/// Emitted when the list controller applies a fetched page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPageLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub request_token: u64,
    pub page: u32,
    pub record_count: usize,
    pub total_pages: u32,
    pub total_results: u32,
    pub favorites_only: bool,
}

impl CharacterPageLoaded {
    pub fn new(
        request_token: u64,
        page: u32,
        record_count: usize,
        total_pages: u32,
        total_results: u32,
        favorites_only: bool,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            request_token,
            page,
            record_count,
            total_pages,
            total_results,
            favorites_only,
        }
    }
}

impl_domain_event!(CharacterPageLoaded);

/// Emitted when a controller fetch ends in an error state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterFetchFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub request_token: u64,
    pub source: String, // "list", "detail", "favorites"
    pub reason: String,
}

impl CharacterFetchFailed {
    pub fn new(request_token: u64, source: &str, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            request_token,
            source: source.to_string(),
            reason,
        }
    }
}

impl_domain_event!(CharacterFetchFailed);

/// Emitted when a fetch completes after a newer one was started.
/// Its result is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleFetchDiscarded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub request_token: u64,
    pub latest_token: u64,
    pub source: String,
}

impl StaleFetchDiscarded {
    pub fn new(request_token: u64, latest_token: u64, source: &str) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            request_token,
            latest_token,
            source: source.to_string(),
        }
    }
}

impl_domain_event!(StaleFetchDiscarded);
