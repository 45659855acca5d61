// src/services/mod.rs
//
// Services Module - shared state owned outside any one controller

pub mod favorites_store;

pub use favorites_store::FavoritesStore;
