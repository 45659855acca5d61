// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the controllers
// - Commands accept plain arguments, return DTOs
// - Commands NEVER contain business logic

pub mod character_commands;
pub mod favorite_commands;

pub use character_commands::*;
pub use favorite_commands::*;
