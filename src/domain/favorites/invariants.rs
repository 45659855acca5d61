use std::collections::HashSet;

use super::entity::FavoriteSet;
use crate::domain::character::CharacterId;
use crate::domain::{DomainError, DomainResult};

/// Validates FavoriteSet invariants
pub fn validate_favorite_set(set: &FavoriteSet) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(set.len());
    for id in set.ids() {
        validate_favorite_id(*id)?;
        if !seen.insert(*id) {
            return Err(DomainError::InvariantViolation(format!(
                "Favorite id {} appears more than once",
                id
            )));
        }
    }
    Ok(())
}

/// Catalog ids start at 1
pub fn validate_favorite_id(id: CharacterId) -> DomainResult<()> {
    if id == 0 {
        return Err(DomainError::InvariantViolation(
            "Favorite id must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for FavoriteSet:
///
/// 1. No duplicates
/// 2. Insertion order preserved
/// 3. Ids are positive
/// 4. Ids are not re-validated against the catalog on read
