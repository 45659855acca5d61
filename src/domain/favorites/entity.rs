use serde::{Deserialize, Serialize};

use crate::domain::character::CharacterId;

/// Key under which the favorite ids are persisted
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered, duplicate-free list of bookmarked character ids.
///
/// Insertion order is preserved. Ids are not checked against the catalog
/// on read, so an id removed upstream stays here and simply fails to
/// fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<CharacterId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a persisted list, keeping the first occurrence of each id
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = CharacterId>,
    {
        let mut set = Self::new();
        for id in ids {
            set.add(id);
        }
        set
    }

    pub fn ids(&self) -> &[CharacterId] {
        &self.ids
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Append `id` if absent. Returns true when the set changed.
    pub fn add(&mut self, id: CharacterId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id` if present. Returns true when the set changed.
    pub fn remove(&mut self, id: CharacterId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    /// Symmetric difference with `{id}`. Returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: CharacterId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// The first `n` ids in insertion order
    pub fn first(&self, n: usize) -> &[CharacterId] {
        &self.ids[..self.ids.len().min(n)]
    }
}
