// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are output-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM controller snapshots and domain entities only

use serde::{Deserialize, Serialize};

use crate::controllers::{CharacterDetailSnapshot, CharacterListSnapshot, FavoritesSnapshot};
use crate::domain::{Character, CharacterId, FavoriteSet};

// ============================================================================
// CHARACTER DTOs
// ============================================================================

/// One row of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSummaryDto {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
    pub is_favorite: bool,
}

impl CharacterSummaryDto {
    pub fn from_character(character: Character, is_favorite: bool) -> Self {
        Self {
            id: character.id,
            name: character.name,
            status: character.status.to_string(),
            species: character.species,
            gender: character.gender.to_string(),
            image: character.image,
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDetailDto {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub image: String,
    pub episode_count: usize,
    pub created: String,
    pub is_favorite: bool,
}

impl CharacterDetailDto {
    pub fn from_character(character: Character, is_favorite: bool) -> Self {
        Self {
            episode_count: character.episode_count(),
            id: character.id,
            name: character.name,
            status: character.status.to_string(),
            species: character.species,
            kind: character.kind,
            gender: character.gender.to_string(),
            origin: character.origin.name,
            location: character.location.name,
            image: character.image,
            created: character.created.to_rfc3339(),
            is_favorite,
        }
    }
}

// ============================================================================
// LISTING DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterListDto {
    pub characters: Vec<CharacterSummaryDto>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub favorites_only: bool,
    pub state: String,
    pub error: Option<String>,
}

impl From<CharacterListSnapshot> for CharacterListDto {
    fn from(snapshot: CharacterListSnapshot) -> Self {
        let favorites = FavoriteSet::from_ids(snapshot.favorite_ids);
        Self {
            characters: snapshot
                .records
                .into_iter()
                .map(|c| {
                    let is_favorite = favorites.contains(c.id);
                    CharacterSummaryDto::from_character(c, is_favorite)
                })
                .collect(),
            current_page: snapshot.page.current_page,
            total_pages: snapshot.page.total_pages,
            total_results: snapshot.page.total_results,
            favorites_only: snapshot.favorites_only,
            state: snapshot.state.to_string(),
            error: snapshot.error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDetailViewDto {
    pub character: Option<CharacterDetailDto>,
    pub state: String,
    pub error: Option<String>,
}

impl From<CharacterDetailSnapshot> for CharacterDetailViewDto {
    fn from(snapshot: CharacterDetailSnapshot) -> Self {
        let is_favorite = snapshot.is_favorite;
        Self {
            character: snapshot
                .record
                .map(|c| CharacterDetailDto::from_character(c, is_favorite)),
            state: snapshot.state.to_string(),
            error: snapshot.error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesListDto {
    pub characters: Vec<CharacterSummaryDto>,
    pub state: String,
    pub error: Option<String>,
}

impl From<FavoritesSnapshot> for FavoritesListDto {
    fn from(snapshot: FavoritesSnapshot) -> Self {
        Self {
            characters: snapshot
                .records
                .into_iter()
                .map(|c| CharacterSummaryDto::from_character(c, true))
                .collect(),
            state: snapshot.state.to_string(),
            error: snapshot.error,
        }
    }
}

// ============================================================================
// FAVORITE TOGGLE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleDto {
    pub id: CharacterId,
    pub is_favorite: bool,
    pub favorite_count: usize,
}
