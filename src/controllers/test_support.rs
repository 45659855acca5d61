// src/controllers/test_support.rs
//
// Shared fixtures for controller tests

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::db::{create_memory_pool, get_connection, initialize_database};
use crate::domain::{Character, CharacterId, FilterState, FAVORITES_KEY};
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::integrations::{CatalogApi, CharacterPage};
use crate::repositories::{write_json, KeyValueRepository, SqliteKeyValueRepository};
use crate::services::FavoritesStore;

/// Favorites store over an in-memory database, pre-seeded with `ids`
/// without emitting any events
pub fn favorites_store(ids: &[CharacterId]) -> (Arc<FavoritesStore>, Arc<EventBus>) {
    let pool = Arc::new(create_memory_pool().unwrap());
    {
        let conn = get_connection(&pool).unwrap();
        initialize_database(&conn).unwrap();
    }

    let repo: Arc<dyn KeyValueRepository> = Arc::new(SqliteKeyValueRepository::new(pool));
    write_json(repo.as_ref(), FAVORITES_KEY, ids).unwrap();

    let bus = Arc::new(EventBus::new());
    let store = Arc::new(FavoritesStore::load(repo, bus.clone()).unwrap());
    (store, bus)
}

/// Catalog whose responses are held back until the test releases them.
/// Each call takes the gate registered for it; an ungated call fails.
#[derive(Default)]
pub struct GatedCatalog {
    listings: Mutex<HashMap<u32, oneshot::Receiver<CharacterPage>>>,
    batches: Mutex<VecDeque<oneshot::Receiver<Vec<Character>>>>,
    singles: Mutex<HashMap<CharacterId, oneshot::Receiver<Character>>>,
}

impl GatedCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gate_listing(&self, page: u32) -> oneshot::Sender<CharacterPage> {
        let (tx, rx) = oneshot::channel();
        self.listings.lock().unwrap().insert(page, rx);
        tx
    }

    /// Batch gates are consumed in call order
    pub fn gate_batch(&self) -> oneshot::Sender<Vec<Character>> {
        let (tx, rx) = oneshot::channel();
        self.batches.lock().unwrap().push_back(rx);
        tx
    }

    pub fn gate_single(&self, id: CharacterId) -> oneshot::Sender<Character> {
        let (tx, rx) = oneshot::channel();
        self.singles.lock().unwrap().insert(id, rx);
        tx
    }
}

async fn released<T>(gate: Option<oneshot::Receiver<T>>, call: String) -> AppResult<T> {
    match gate {
        Some(rx) => rx.await.map_err(|e| AppError::Network(e.to_string())),
        None => Err(AppError::Other(format!("no gate for {}", call))),
    }
}

#[async_trait]
impl CatalogApi for GatedCatalog {
    async fn list_characters(&self, page: u32, _filters: &FilterState) -> AppResult<CharacterPage> {
        let gate = self.listings.lock().unwrap().remove(&page);
        released(gate, format!("page {}", page)).await
    }

    async fn get_characters(&self, ids: &[CharacterId]) -> AppResult<Vec<Character>> {
        let gate = self.batches.lock().unwrap().pop_front();
        released(gate, format!("batch {:?}", ids)).await
    }

    async fn get_character(&self, id: CharacterId) -> AppResult<Character> {
        let gate = self.singles.lock().unwrap().remove(&id);
        released(gate, format!("character {}", id)).await
    }
}
