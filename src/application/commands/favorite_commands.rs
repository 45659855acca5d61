// src/application/commands/favorite_commands.rs
//
// Favorite Command Handlers

use crate::application::{dto::*, state::AppState};
use crate::domain::CharacterId;
use crate::error::AppResult;

/// Fetch every favorited character
pub async fn list_favorites(state: &AppState) -> AppResult<FavoritesListDto> {
    state.favorites_controller.refresh().await;
    Ok(FavoritesListDto::from(state.favorites_controller.snapshot()))
}

/// Add `id` if absent, remove it if present
pub fn toggle_favorite(state: &AppState, id: CharacterId) -> AppResult<FavoriteToggleDto> {
    let is_favorite = state.list_controller.toggle_favorite(id)?;

    Ok(FavoriteToggleDto {
        id,
        is_favorite,
        favorite_count: state.favorites.len(),
    })
}

/// Remove `id` from the favorites. Removing an absent id is a no-op.
pub fn remove_favorite(state: &AppState, id: CharacterId) -> AppResult<FavoriteToggleDto> {
    state.favorites_controller.remove_favorite(id)?;

    Ok(FavoriteToggleDto {
        id,
        is_favorite: false,
        favorite_count: state.favorites.len(),
    })
}
