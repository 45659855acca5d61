// src/main.rs
//
// CharHub CLI entry point

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charhub::application::commands::*;
use charhub::application::dto::*;
use charhub::application::{AppState, Cli, Commands, ErrorResponse};
use charhub::db::{create_connection_pool, get_connection, initialize_database};
use charhub::events::create_event_bus;
use charhub::integrations::{CatalogApi, RemoteCatalogClient};
use charhub::repositories::{KeyValueRepository, SqliteKeyValueRepository};
use charhub::services::FavoritesStore;
use charhub::AppError;

fn main() -> Result<()> {
    // Initialize tracing (also receives `log` records)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    // 1. INFRASTRUCTURE
    let event_bus = Arc::new(create_event_bus());
    let db_path = config.resolve_database_path()?;
    let pool = Arc::new(create_connection_pool(&db_path)?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
    }

    // 2. PERSISTENCE
    let kv_repo: Arc<dyn KeyValueRepository> = Arc::new(SqliteKeyValueRepository::new(pool));
    let favorites = Arc::new(FavoritesStore::load(kv_repo, event_bus.clone())?);

    // 3. CATALOG
    let catalog: Arc<dyn CatalogApi> = Arc::new(RemoteCatalogClient::new(
        config.api_url.clone(),
        config.request_timeout,
    )?);

    // 4. APPLICATION STATE (controllers + event handler wiring)
    let state = AppState::new(config, catalog, favorites, event_bus);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let json = cli.json;
    runtime.block_on(async move {
        match cli.command {
            Commands::List(args) => {
                let dto = list_characters(&state, args.into()).await;
                emit(json, dto, print_list)
            }
            Commands::Show { id } => {
                let dto = show_character(&state, id).await;
                emit(json, dto, print_detail)
            }
            Commands::Favorites => {
                let dto = list_favorites(&state).await;
                emit(json, dto, print_favorites)
            }
            Commands::Favorite { id } => emit(json, toggle_favorite(&state, id), print_toggle),
            Commands::Unfavorite { id } => emit(json, remove_favorite(&state, id), print_toggle),
        }
    })
}

/// Print a command result as JSON or text. Errors are printed in the
/// same format and turned into a failing exit status.
fn emit<T, F>(json: bool, result: Result<T, AppError>, print_text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match result {
        Ok(value) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_text(&value);
            }
            Ok(())
        }
        Err(e) => {
            let message = e.to_string();
            let response = ErrorResponse::from_app_error(e);
            if json {
                println!("{}", response.to_json());
            }
            Err(anyhow::anyhow!(message))
        }
    }
}

fn print_summary(c: &CharacterSummaryDto) {
    let star = if c.is_favorite { "*" } else { " " };
    println!(
        "{} {:>4}  {}  [{} - {}, {}]",
        star, c.id, c.name, c.status, c.species, c.gender
    );
}

fn print_list(dto: &CharacterListDto) {
    if let Some(error) = &dto.error {
        eprintln!("{}", error);
        return;
    }
    if dto.characters.is_empty() {
        println!("No characters found.");
        return;
    }
    for c in &dto.characters {
        print_summary(c);
    }
    println!(
        "\nPage {} of {} ({} results)",
        dto.current_page, dto.total_pages, dto.total_results
    );
}

fn print_detail(dto: &CharacterDetailViewDto) {
    let Some(c) = &dto.character else {
        eprintln!("{}", dto.error.as_deref().unwrap_or("Character not found"));
        return;
    };
    let star = if c.is_favorite { " *" } else { "" };
    println!("{} (#{}){}", c.name, c.id, star);
    println!("  Status:    {}", c.status);
    println!("  Species:   {}", c.species);
    if !c.kind.is_empty() {
        println!("  Type:      {}", c.kind);
    }
    println!("  Gender:    {}", c.gender);
    println!("  Origin:    {}", c.origin);
    println!("  Location:  {}", c.location);
    println!("  Episodes:  {}", c.episode_count);
    println!("  Image:     {}", c.image);
}

fn print_favorites(dto: &FavoritesListDto) {
    if let Some(error) = &dto.error {
        eprintln!("{}", error);
        return;
    }
    if dto.characters.is_empty() {
        println!("No favorite characters yet.");
        return;
    }
    for c in &dto.characters {
        print_summary(c);
    }
}

fn print_toggle(dto: &FavoriteToggleDto) {
    let verb = if dto.is_favorite { "Added" } else { "Removed" };
    println!(
        "{} #{} ({} favorites)",
        verb, dto.id, dto.favorite_count
    );
}
