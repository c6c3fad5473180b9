// src/lib.rs
// Movie Club Dashboard - normalization, filtering and chart aggregates
//
// Architecture:
// - Domain-centric: parsing, canonicalization and aggregation are pure functions
// - Load once: the sheet is normalized a single time per load
// - Recompute always: every filter change derives aggregates from scratch
// - Event-driven: services report loads and queries through the event bus
// - Application Layer: DTOs are the contract with the rendering UI

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    apply_filters,
    canonical_presenter,
    canonicalize_presenter,
    coerce_season,
    parse_duration,
    parse_rating,
    validate_movie,
    AggregateSummary,
    DashboardSnapshot,
    FilterOptions,
    // Filtering
    FilterState,
    Groupings,
    LabelCount,
    LabelMinutes,
    // Movies
    MovieRecord,
    PresenterStats,
    RawMovieRecord,
    SeasonStats,
    Selection,
};

pub use domain::statistics::{
    distinct_presenters, distinct_seasons, filter_options, group_by_genre, group_by_origin,
    group_by_presenter, group_by_season, summarize, top_origins, watch_time_by_season,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::DashboardConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DashboardComputed, DatasetLoaded, DomainEvent, EventBus, EventLogEntry,
    DEFAULT_EVENT_LOG_CAPACITY,
};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{InMemoryMovieRepository, JsonFileMovieRepository, MovieRepository};

pub use services::{
    build_snapshot, normalize_records, DashboardService, Dataset, DatasetService,
    NormalizationReport,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
