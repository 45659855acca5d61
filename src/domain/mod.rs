// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod character;
pub mod favorites;
pub mod query;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog records
pub use character::{Character, CharacterGender, CharacterId, CharacterStatus, LocationRef};

// Favorites
pub use favorites::{validate_favorite_set, FavoriteSet, FAVORITES_KEY};

// Listing query
pub use query::{FilterState, PageState, FIRST_PAGE};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid page {0}: pages start at 1")]
    InvalidPage(u32),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
