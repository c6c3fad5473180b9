// src/domain/filter/mod.rs
//
// Filter Engine
//
// The presentation layer owns the filter state and hands a copy in for
// every query. Filtering only borrows the dataset; it never reorders or
// mutates records.

use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieRecord;

/// Label the UI uses for "no restriction".
pub const ALL: &str = "All";

/// A select-box value: either everything or one concrete label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(label) => label == value,
        }
    }

    /// Absent values only pass an `All` selection.
    pub fn matches_optional(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(label) => value == Some(label.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(label) => label,
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Only(label) => label,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current season / presenter / search selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub season: Selection,
    pub presenter: Selection,
    pub search_text: String,
}

impl FilterState {
    pub fn new(
        season: impl Into<Selection>,
        presenter: impl Into<Selection>,
        search_text: impl Into<String>,
    ) -> Self {
        Self {
            season: season.into(),
            presenter: presenter.into(),
            search_text: search_text.into(),
        }
    }

    /// `needle` is the lowercased search text.
    fn matches(&self, movie: &MovieRecord, needle: &str) -> bool {
        self.season.matches(&movie.season)
            && self.presenter.matches_optional(movie.presented_by.as_deref())
            && (needle.is_empty() || movie.title.to_lowercase().contains(needle))
    }
}

/// Records retained by `filters`, in input order.
pub fn apply_filters<'a>(records: &'a [MovieRecord], filters: &FilterState) -> Vec<&'a MovieRecord> {
    let needle = filters.search_text.to_lowercase();
    records
        .iter()
        .filter(|movie| filters.matches(movie, &needle))
        .collect()
}
