// src/domain/statistics/entity.rs

use serde::{Deserialize, Serialize};

use crate::domain::filter::FilterState;
use crate::domain::movie::MovieRecord;

/// Headline numbers for a record collection.
/// Derived on every query, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub total_movies: usize,
    pub total_minutes: u64,
    pub unique_origin_count: usize,
    pub unique_presenter_count: usize,

    /// Mean over rated movies only; 0 when none are rated
    pub average_rating_percent: f64,

    /// Denominator used for `average_rating_percent`
    pub rated_movies: usize,
}

/// A label with the number of movies behind it (genre, origin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// A label with summed minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMinutes {
    pub label: String,
    pub total_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterStats {
    pub presenter: String,
    pub movies: usize,
    pub total_minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub season: String,
    pub movies: usize,
    pub total_minutes: u64,
    pub average_minutes: f64,
}

/// Chart-ready groupings for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Groupings {
    /// Top genres by movie count (multi-label)
    pub genres: Vec<LabelCount>,

    /// Every origin, missing ones under "Unknown"
    pub origins: Vec<LabelCount>,

    /// Known origins only, busiest first, capped for charts
    pub top_origins: Vec<LabelCount>,

    /// Busiest presenters in the filtered view
    pub presenters: Vec<PresenterStats>,

    /// Season trend over the whole dataset, independent of filters
    pub seasons: Vec<SeasonStats>,

    /// Watch time per season in the filtered view
    pub watch_time_by_season: Vec<LabelMinutes>,
}

/// Values that populate the season and presenter select boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub seasons: Vec<String>,
    pub presenters: Vec<String>,
}

/// Everything the dashboard renders for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub filters: FilterState,
    pub summary: AggregateSummary,
    pub groupings: Groupings,
    pub movies: Vec<MovieRecord>,
    pub options: FilterOptions,
}
