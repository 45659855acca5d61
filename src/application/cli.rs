// src/application/cli.rs
//
// Command-line surface

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, DEFAULT_FILTER_DEBOUNCE_MS};
use crate::domain::{CharacterId, FilterState, FIRST_PAGE};
use crate::integrations::DEFAULT_API_URL;

use super::commands::ListRequest;

/// Browse the character catalog and keep a local list of favorites.
#[derive(Debug, Parser)]
#[command(name = "charhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog API root.
    #[arg(long, global = true, env = "CHARHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Favorites database file.
    #[arg(long, global = true, env = "CHARHUB_DB")]
    pub database: Option<PathBuf>,

    /// Request timeout in seconds; unset means no timeout.
    #[arg(long, global = true, env = "CHARHUB_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Quiet period applied to filter edits, in milliseconds.
    #[arg(long, global = true, env = "CHARHUB_DEBOUNCE_MS", default_value_t = DEFAULT_FILTER_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> AppConfig {
        AppConfig {
            api_url: self.api_url.clone(),
            database_path: self.database.clone(),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            filter_debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List one page of characters.
    List(ListArgs),
    /// Show a single character.
    Show {
        id: CharacterId,
    },
    /// List every favorited character.
    Favorites,
    /// Toggle a character in the favorites.
    Favorite {
        id: CharacterId,
    },
    /// Remove a character from the favorites.
    Unfavorite {
        id: CharacterId,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = FIRST_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    #[arg(long, default_value = "")]
    pub name: String,

    /// alive, dead or unknown.
    #[arg(long, default_value = "")]
    pub status: String,

    #[arg(long, default_value = "")]
    pub species: String,

    /// female, male, genderless or unknown.
    #[arg(long, default_value = "")]
    pub gender: String,

    /// Only list favorited characters (first 20).
    #[arg(long)]
    pub favorites_only: bool,
}

impl From<ListArgs> for ListRequest {
    fn from(args: ListArgs) -> Self {
        Self {
            page: args.page,
            filters: FilterState::new(args.name, args.status, args.species, args.gender),
            favorites_only: args.favorites_only,
        }
    }
}
