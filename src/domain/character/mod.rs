//! Character records are owned by the remote catalog:
//!
//! 1. Identity is assigned upstream and never changes
//! 2. Records are never mutated locally, only replaced on refetch
//! 3. `type` may be empty

pub mod entity;

pub use entity::{Character, CharacterGender, CharacterId, CharacterStatus, LocationRef};
