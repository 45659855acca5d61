use async_trait::async_trait;

use super::schema::CharacterPage;
use crate::domain::{Character, CharacterId, FilterState};
use crate::error::AppResult;

/// Read-only access to the remote character catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of the listing endpoint. A 404 from the catalog means
    /// "no records match" and yields an empty page, not an error.
    async fn list_characters(&self, page: u32, filters: &FilterState) -> AppResult<CharacterPage>;

    /// Records for an explicit id list, in one batch request
    async fn get_characters(&self, ids: &[CharacterId]) -> AppResult<Vec<Character>>;

    /// A single record. A 404 yields `AppError::NotFound`.
    async fn get_character(&self, id: CharacterId) -> AppResult<Character>;
}
