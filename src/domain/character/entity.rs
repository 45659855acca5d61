use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote catalog
pub type CharacterId = u32;

/// A single character as returned by the remote catalog.
/// Records are immutable once fetched; a refetch replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,

    pub name: String,

    pub status: CharacterStatus,

    pub species: String,

    /// Sub-species or variant, frequently empty
    #[serde(rename = "type", default)]
    pub kind: String,

    pub gender: CharacterGender,

    /// Where the character comes from
    pub origin: LocationRef,

    /// Last known location
    pub location: LocationRef,

    /// Avatar image URL
    pub image: String,

    /// Episode resource URLs the character appears in
    #[serde(default)]
    pub episode: Vec<String>,

    /// Self resource URL
    #[serde(default)]
    pub url: String,

    /// When the record was created upstream
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterGender {
    Male,
    Female,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Named reference to a location resource. `url` is empty when the
/// catalog has no resource for it (e.g. origin "unknown").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Character {
    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterStatus::Alive => write!(f, "Alive"),
            CharacterStatus::Dead => write!(f, "Dead"),
            CharacterStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterGender::Male => write!(f, "Male"),
            CharacterGender::Female => write!(f, "Female"),
            CharacterGender::Genderless => write!(f, "Genderless"),
            CharacterGender::Unknown => write!(f, "unknown"),
        }
    }
}
