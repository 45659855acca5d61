// src/config.rs
//
// Runtime configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::db::get_database_path;
use crate::error::AppResult;
use crate::integrations::DEFAULT_API_URL;

/// Trailing delay applied to filter edits before a listing fetch
pub const DEFAULT_FILTER_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog API root, without trailing slash
    pub api_url: String,
    /// Favorites database; `None` uses the platform data directory
    pub database_path: Option<PathBuf>,
    /// `None` leaves requests without a deadline
    pub request_timeout: Option<Duration>,
    pub filter_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            database_path: None,
            request_timeout: None,
            filter_debounce: Duration::from_millis(DEFAULT_FILTER_DEBOUNCE_MS),
        }
    }
}

impl AppConfig {
    pub fn resolve_database_path(&self) -> AppResult<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => get_database_path(),
        }
    }
}
