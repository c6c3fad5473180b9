// src/domain/movie/mod.rs

pub mod entity;
pub mod fields;
pub mod invariants;

pub use entity::{MovieRecord, RawMovieRecord};
pub use fields::{coerce_season, parse_duration, parse_rating};
pub use invariants::validate_movie;
