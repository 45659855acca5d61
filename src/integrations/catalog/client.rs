// src/integrations/catalog/client.rs
//
// Catalog REST client
//
// ARCHITECTURE:
// - Turns a query into one GET request
// - Maps wire JSON → domain records (see schema.rs)
// - Used by the list, detail and favorites controllers

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use std::time::Duration;

use super::api::CatalogApi;
use super::schema::{decode_batch, decode_listing, decode_single, CharacterPage};
use crate::domain::{Character, CharacterId, FilterState};
use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";

/// Catalog API client
pub struct RemoteCatalogClient {
    base_url: String,
    http_client: Client,
}

impl RemoteCatalogClient {
    /// Create a client for the catalog rooted at `base_url`.
    ///
    /// Requests never time out unless `timeout` is given.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_http_client(base_url, http_client))
    }

    /// Use a preconfigured reqwest client
    pub fn with_http_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/character?page=N` plus every non-empty filter
    pub fn listing_url(&self, page: u32, filters: &FilterState) -> AppResult<Url> {
        let page = page.to_string();
        let params = std::iter::once(("page", page.as_str())).chain(filters.active_fields());

        Url::parse_with_params(&format!("{}/character", self.base_url), params)
            .map_err(|e| AppError::Other(format!("Invalid catalog URL: {}", e)))
    }

    /// `{base}/character/{id1,id2,...}`
    pub fn batch_url(&self, ids: &[CharacterId]) -> AppResult<Url> {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.resource_url(&joined)
    }

    fn resource_url(&self, path: &str) -> AppResult<Url> {
        Url::parse(&format!("{}/character/{}", self.base_url, path))
            .map_err(|e| AppError::Other(format!("Invalid catalog URL: {}", e)))
    }

    /// Send a GET and return status plus raw body.
    /// Status interpretation is left to the decoders.
    async fn fetch(&self, url: Url) -> AppResult<(StatusCode, String)> {
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Catalog request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read catalog response: {}", e)))?;

        Ok((status, body))
    }
}

#[async_trait]
impl CatalogApi for RemoteCatalogClient {
    async fn list_characters(&self, page: u32, filters: &FilterState) -> AppResult<CharacterPage> {
        let (status, body) = self.fetch(self.listing_url(page, filters)?).await?;
        decode_listing(status, &body)
    }

    async fn get_characters(&self, ids: &[CharacterId]) -> AppResult<Vec<Character>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let (status, body) = self.fetch(self.batch_url(ids)?).await?;
        decode_batch(status, &body)
    }

    async fn get_character(&self, id: CharacterId) -> AppResult<Character> {
        let (status, body) = self.fetch(self.resource_url(&id.to_string())?).await?;
        decode_single(status, &body)
    }
}
