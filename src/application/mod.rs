// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the controllers and the favorites store
// - It provides the boundary between the CLI and the controllers
// - It translates controller snapshots into DTOs

pub mod cli;
pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use cli::{Cli, Commands};
pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
