// src/config.rs
//
// Dashboard tuning knobs. Every field has a default so a partial JSON
// file (or none at all) is enough.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::events::DEFAULT_EVENT_LOG_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Genres shown in the distribution chart
    pub genre_limit: usize,

    /// Presenters shown in the leaderboard
    pub presenter_limit: usize,

    /// Origins shown in the origin chart
    pub origin_chart_limit: usize,

    /// Presenter chart labels are cut to this many characters
    pub presenter_label_max: usize,

    /// Longer origin chart labels are cut and suffixed with "..."
    pub origin_label_max: usize,

    /// Event bus emissions kept for debugging
    pub event_log_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            genre_limit: 8,
            presenter_limit: 8,
            origin_chart_limit: 8,
            presenter_label_max: 8,
            origin_label_max: 12,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
