use serde::{Deserialize, Serialize};

/// Lifecycle of a list-style controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Lifecycle of the detail controller. Every failure is `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Found,
    NotFound,
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Loaded => write!(f, "loaded"),
            LoadState::Errored => write!(f, "errored"),
        }
    }
}

impl std::fmt::Display for DetailState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailState::Idle => write!(f, "idle"),
            DetailState::Loading => write!(f, "loading"),
            DetailState::Found => write!(f, "found"),
            DetailState::NotFound => write!(f, "not_found"),
        }
    }
}
