// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;

pub use catalog::{CatalogApi, CharacterPage, RemoteCatalogClient, DEFAULT_API_URL};
