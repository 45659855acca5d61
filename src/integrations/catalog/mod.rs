// src/integrations/catalog/mod.rs
//
// Remote character catalog (REST)
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Stateless: every call is one request and one decoded response
// - No retries, no caching

pub mod api;
pub mod client;
pub mod schema;

pub use api::CatalogApi;
#[cfg(test)]
pub use api::MockCatalogApi;
pub use client::{RemoteCatalogClient, DEFAULT_API_URL};
pub use schema::{decode_batch, decode_listing, decode_single, CharacterPage};
