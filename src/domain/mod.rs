// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod filter;
pub mod movie;
pub mod presenter;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    coerce_season, parse_duration, parse_rating, validate_movie, MovieRecord, RawMovieRecord,
};

// Presenter canonicalization
pub use presenter::{canonical_presenter, canonicalize_presenter, NO_PRESENTER};

// Filtering
pub use filter::{apply_filters, FilterState, Selection, ALL};

// Statistics Domain (Derived Data)
pub use statistics::{
    AggregateSummary, DashboardSnapshot, FilterOptions, Groupings, LabelCount, LabelMinutes,
    PresenterStats, SeasonStats,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of record invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
