// src/services/dataset_service.rs
//
// Dataset Service
//
// Reads the raw sheet once and keeps the normalized records.
//
// CRITICAL RULES:
// - Normalization happens once per load, never per query
// - A loaded dataset is immutable; reloading swaps in a new one
// - Malformed fields never fail a load; only I/O and JSON errors do

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::movie::{validate_movie, MovieRecord, RawMovieRecord};
use crate::domain::presenter::is_rewritten;
use crate::domain::statistics::{filter_options, FilterOptions};
use crate::error::{AppError, AppResult};
use crate::events::{DatasetLoaded, EventBus};
use crate::repositories::MovieRepository;

/// The normalized movie collection, in sheet order.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Select-box values, always over the full dataset.
    pub fn options(&self) -> FilterOptions {
        filter_options(&self.records)
    }
}

/// Outcome counters of one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub canonicalized_presenters: usize,
    pub untitled_records: usize,
}

/// Normalize every raw row, counting rewrites and blank titles.
pub fn normalize_records(raw: &[RawMovieRecord]) -> (Vec<MovieRecord>, NormalizationReport) {
    let mut report = NormalizationReport::default();
    let mut records = Vec::with_capacity(raw.len());

    for row in raw {
        if row.presented_by.as_str().is_some_and(is_rewritten) {
            report.canonicalized_presenters += 1;
        }

        let movie = MovieRecord::from_raw(row);
        if let Err(e) = validate_movie(&movie) {
            log::warn!("Keeping record #{}: {}", records.len(), e);
            report.untitled_records += 1;
        }
        records.push(movie);
    }

    (records, report)
}

pub struct DatasetService {
    movie_repo: Arc<dyn MovieRepository>,
    event_bus: Arc<EventBus>,
    current: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            movie_repo,
            event_bus,
            current: RwLock::new(None),
        }
    }

    /// Read and normalize the sheet, replacing any previously loaded dataset.
    pub fn load(&self) -> AppResult<Arc<Dataset>> {
        if self.is_loaded() {
            log::info!("Reloading movie dataset");
        }

        let raw = self.movie_repo.list_all()?;
        let (records, report) = normalize_records(&raw);
        let dataset = Arc::new(Dataset::new(records));

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&dataset));

        log::info!(
            "Loaded {} movies ({} presenter spellings canonicalized, {} untitled)",
            dataset.len(),
            report.canonicalized_presenters,
            report.untitled_records
        );

        self.event_bus.emit(DatasetLoaded::new(
            dataset.len(),
            report.canonicalized_presenters,
            report.untitled_records,
        ));

        Ok(dataset)
    }

    /// The loaded dataset, or `AppError::NotLoaded`.
    pub fn current(&self) -> AppResult<Arc<Dataset>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(AppError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
