//! Statistics over the movie collection.
//!
//! 1. Statistics are ALWAYS derived, NEVER primary
//! 2. Every function here is pure: same records in, same numbers out
//! 3. Nothing is cached between queries
//! 4. Absent labels are dropped, except origin which buckets under "Unknown"

pub mod aggregate;
pub mod entity;

pub use aggregate::{
    distinct_presenters, distinct_seasons, filter_options, group_by_genre, group_by_origin,
    group_by_presenter, group_by_season, summarize, top_origins, watch_time_by_season,
    UNKNOWN_LABEL,
};
pub use entity::{
    AggregateSummary, DashboardSnapshot, FilterOptions, Groupings, LabelCount, LabelMinutes,
    PresenterStats, SeasonStats,
};
