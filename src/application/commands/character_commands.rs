// src/application/commands/character_commands.rs
//
// Character Command Handlers
//
// RULES:
// - Accept plain arguments
// - Drive the controllers
// - Return DTOs
// - Never contain business logic

use crate::application::{dto::*, state::AppState};
use crate::domain::{CharacterId, FilterState};
use crate::error::AppResult;

/// Arguments of a listing request
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub page: u32,
    pub filters: FilterState,
    pub favorites_only: bool,
}

/// Fetch one page of the listing
pub async fn list_characters(state: &AppState, request: ListRequest) -> AppResult<CharacterListDto> {
    state
        .list_controller
        .open(request.filters, request.page, request.favorites_only)
        .await?;

    Ok(CharacterListDto::from(state.list_controller.snapshot()))
}

/// Fetch a single character
pub async fn show_character(state: &AppState, id: CharacterId) -> AppResult<CharacterDetailViewDto> {
    state.detail_controller.load(id).await;
    Ok(CharacterDetailViewDto::from(state.detail_controller.snapshot()))
}
