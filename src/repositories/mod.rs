// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data readers
// - NO business logic
// - NO normalization
// - NO event emission

pub mod movie_repository;

pub use movie_repository::{InMemoryMovieRepository, JsonFileMovieRepository, MovieRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
