// src/domain/movie/entity.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{coerce_season, parse_duration, parse_rating, text_field};
use crate::domain::presenter::canonicalize_presenter;

/// A movie row exactly as it appears in the club export.
/// Field names follow the spreadsheet headers; values are kept loose
/// because the sheet mixes numbers and text in the same column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMovieRecord {
    #[serde(rename = "Title", default)]
    pub title: Value,

    #[serde(rename = "Season", default)]
    pub season: Value,

    #[serde(rename = "Presented by", default)]
    pub presented_by: Value,

    #[serde(rename = "Duration (min)", default)]
    pub duration: Value,

    #[serde(rename = "Genre", default)]
    pub genre: Value,

    #[serde(rename = "Origin", default)]
    pub origin: Value,

    #[serde(rename = "Release Year", default)]
    pub release_year: Value,

    #[serde(rename = "Director", default)]
    pub director: Value,

    #[serde(rename = "RottenTomatoes Rating", default)]
    pub rating: Value,

    #[serde(rename = "Synopsis", default)]
    pub synopsis: Value,
}

/// A normalized movie record.
/// Built once per dataset load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,

    /// Season label; empty when the sheet had none
    pub season: String,

    /// Canonical presenter name
    pub presented_by: Option<String>,

    pub duration_minutes: u32,

    /// Comma-separated genre labels
    pub genre: Option<String>,

    pub origin: Option<String>,
    pub release_year: Option<String>,
    pub director: Option<String>,

    /// Rotten Tomatoes score in percent, when the sheet had a usable one
    pub rating_percent: Option<f64>,

    pub synopsis: Option<String>,
}

impl MovieRecord {
    /// Normalize a raw record: canonical presenter, string season,
    /// parsed duration and rating.
    pub fn from_raw(raw: &RawMovieRecord) -> Self {
        let presented_by = text_field(&raw.presented_by);

        Self {
            title: text_field(&raw.title).unwrap_or_default(),
            season: coerce_season(&raw.season),
            presented_by: canonicalize_presenter(presented_by.as_deref()),
            duration_minutes: parse_duration(&raw.duration),
            genre: text_field(&raw.genre),
            origin: text_field(&raw.origin),
            release_year: text_field(&raw.release_year),
            director: text_field(&raw.director),
            rating_percent: parse_rating(&raw.rating),
            synopsis: text_field(&raw.synopsis),
        }
    }

    /// Genre labels, trimmed, in sheet order. Empty tokens are skipped.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .into_iter()
            .flat_map(|genre| genre.split(','))
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// First listed genre, used for compact table rows.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres().next()
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl From<&RawMovieRecord> for MovieRecord {
    fn from(raw: &RawMovieRecord) -> Self {
        Self::from_raw(raw)
    }
}
