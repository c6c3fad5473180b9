// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the dashboard UI and the services
// - Translates domain values into DTOs the renderer consumes
// - Owns display concerns (rounding, label truncation)

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
