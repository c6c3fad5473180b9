// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Errors leave as serialized ErrorResponse strings
// - Commands NEVER contain business logic

pub mod dashboard_commands;

pub use dashboard_commands::*;
