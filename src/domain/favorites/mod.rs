pub mod entity;
pub mod invariants;

pub use entity::{FavoriteSet, FAVORITES_KEY};
pub use invariants::validate_favorite_set;
