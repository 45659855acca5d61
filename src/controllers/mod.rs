// src/controllers/mod.rs
//
// Controllers - view state over the catalog and the favorites
//
// CRITICAL RULES:
// - Controllers own presentation state, never persistence
// - Favorites are read and written only through FavoritesStore
// - No lock guard is held across an await

pub mod character_detail_controller;
pub mod character_list_controller;
pub mod favorites_controller;
pub mod request_token;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use character_detail_controller::{
    CharacterDetailController, CharacterDetailSnapshot, DETAIL_FETCH_ERROR,
};
pub use character_list_controller::{
    plan_fetch, CharacterListController, CharacterListSnapshot, FetchPlan, FAVORITES_ONLY_LIMIT,
    LIST_FETCH_ERROR,
};
pub use favorites_controller::{FavoritesController, FavoritesSnapshot, FAVORITES_FETCH_ERROR};
pub use request_token::RequestTokens;
pub use state::{DetailState, LoadState};
