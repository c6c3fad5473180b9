// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Display rounding and label truncation live here, never in the domain
// - Conversion FROM domain values only (never TO), filters excepted

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::domain::filter::{FilterState, Selection};
use crate::domain::statistics::{
    AggregateSummary, DashboardSnapshot, FilterOptions, LabelCount, LabelMinutes, PresenterStats,
    SeasonStats,
};
use crate::domain::MovieRecord;

// ============================================================================
// FILTER DTOs
// ============================================================================

/// Filter selection as sent by the UI. Missing fields mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDto {
    pub season: Option<String>,
    pub presenter: Option<String>,
    pub search: Option<String>,
}

impl From<FilterDto> for FilterState {
    fn from(dto: FilterDto) -> Self {
        Self {
            season: dto.season.map(Selection::from).unwrap_or_default(),
            presenter: dto.presenter.map(Selection::from).unwrap_or_default(),
            search_text: dto.search.unwrap_or_default(),
        }
    }
}

impl From<FilterState> for FilterDto {
    fn from(filters: FilterState) -> Self {
        Self {
            season: Some(filters.season.into()),
            presenter: Some(filters.presenter.into()),
            search: Some(filters.search_text),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsDto {
    pub seasons: Vec<String>,
    pub presenters: Vec<String>,
}

impl From<FilterOptions> for FilterOptionsDto {
    fn from(options: FilterOptions) -> Self {
        Self {
            seasons: options.seasons,
            presenters: options.presenters,
        }
    }
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDto {
    pub total_movies: usize,
    pub total_minutes: u64,
    /// Watch time rounded to whole hours
    pub total_hours: u64,
    pub unique_countries: usize,
    pub unique_presenters: usize,
    /// Average rating rounded to one decimal
    pub average_rating: f64,
    pub rated_movies: usize,
}

impl From<AggregateSummary> for SummaryDto {
    fn from(summary: AggregateSummary) -> Self {
        Self {
            total_movies: summary.total_movies,
            total_minutes: summary.total_minutes,
            total_hours: (summary.total_minutes as f64 / 60.0).round() as u64,
            unique_countries: summary.unique_origin_count,
            unique_presenters: summary.unique_presenter_count,
            average_rating: (summary.average_rating_percent * 10.0).round() / 10.0,
            rated_movies: summary.rated_movies,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonTrendDto {
    /// Axis label, e.g. "S3"
    pub season: String,
    /// Raw season value, usable as a filter
    pub value: String,
    pub movies: usize,
    pub duration: u64,
    pub avg_duration: u64,
}

impl From<SeasonStats> for SeasonTrendDto {
    fn from(stats: SeasonStats) -> Self {
        Self {
            season: format!("S{}", stats.season),
            value: stats.season,
            movies: stats.movies,
            duration: stats.total_minutes,
            avg_duration: stats.average_minutes.round() as u64,
        }
    }
}

/// One slice of the genre pie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSliceDto {
    pub name: String,
    pub value: usize,
}

impl From<LabelCount> for ChartSliceDto {
    fn from(count: LabelCount) -> Self {
        Self {
            name: count.label,
            value: count.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginBarDto {
    pub name: String,
    pub count: usize,
}

impl From<LabelCount> for OriginBarDto {
    fn from(count: LabelCount) -> Self {
        Self {
            name: count.label,
            count: count.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenterBarDto {
    pub name: String,
    pub movies: usize,
    pub duration: u64,
}

impl From<PresenterStats> for PresenterBarDto {
    fn from(stats: PresenterStats) -> Self {
        Self {
            name: stats.presenter,
            movies: stats.movies,
            duration: stats.total_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchTimeDto {
    pub name: String,
    pub duration: u64,
}

impl From<LabelMinutes> for WatchTimeDto {
    fn from(minutes: LabelMinutes) -> Self {
        Self {
            name: minutes.label,
            duration: minutes.total_minutes,
        }
    }
}

// ============================================================================
// MOVIE TABLE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRowDto {
    pub season: String,
    pub title: String,
    pub presenter: Option<String>,
    pub release_year: Option<String>,
    pub duration: u32,
    pub primary_genre: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub origin: Option<String>,
    pub rating: Option<f64>,
    pub synopsis: Option<String>,
}

impl From<MovieRecord> for MovieRowDto {
    fn from(movie: MovieRecord) -> Self {
        Self {
            primary_genre: movie.primary_genre().map(str::to_string),
            season: movie.season,
            title: movie.title,
            presenter: movie.presented_by,
            release_year: movie.release_year,
            duration: movie.duration_minutes,
            genre: movie.genre,
            director: movie.director,
            origin: movie.origin,
            rating: movie.rating_percent,
            synopsis: movie.synopsis,
        }
    }
}

// ============================================================================
// DASHBOARD DTO
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub filters: FilterDto,
    pub summary: SummaryDto,
    pub season_trend: Vec<SeasonTrendDto>,
    pub genres: Vec<ChartSliceDto>,
    /// Full origin table, labels untouched
    pub origins: Vec<OriginBarDto>,
    /// Origin chart, labels truncated
    pub top_origins: Vec<OriginBarDto>,
    /// Presenter chart, labels truncated
    pub presenters: Vec<PresenterBarDto>,
    pub watch_time: Vec<WatchTimeDto>,
    pub movies: Vec<MovieRowDto>,
    pub options: FilterOptionsDto,
}

impl DashboardDto {
    pub fn from_snapshot(snapshot: DashboardSnapshot, config: &DashboardConfig) -> Self {
        let groupings = snapshot.groupings;

        Self {
            filters: snapshot.filters.into(),
            summary: snapshot.summary.into(),
            season_trend: groupings.seasons.into_iter().map(Into::into).collect(),
            genres: groupings.genres.into_iter().map(Into::into).collect(),
            origins: groupings.origins.into_iter().map(Into::into).collect(),
            top_origins: groupings
                .top_origins
                .into_iter()
                .map(|origin| OriginBarDto {
                    name: truncate_label(&origin.label, config.origin_label_max, "..."),
                    count: origin.count,
                })
                .collect(),
            presenters: groupings
                .presenters
                .into_iter()
                .map(|stats| PresenterBarDto {
                    name: truncate_label(&stats.presenter, config.presenter_label_max, ""),
                    movies: stats.movies,
                    duration: stats.total_minutes,
                })
                .collect(),
            watch_time: groupings.watch_time_by_season.into_iter().map(Into::into).collect(),
            movies: snapshot.movies.into_iter().map(Into::into).collect(),
            options: snapshot.options.into(),
        }
    }
}

/// Cut `label` to `max` characters, appending `suffix` when cut.
pub fn truncate_label(label: &str, max: usize, suffix: &str) -> String {
    match label.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &label[..cut], suffix),
        None => label.to_string(),
    }
}
