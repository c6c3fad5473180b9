// src/services/dashboard_service.rs
//
// Dashboard Service
//
// Answers one filter state at a time: filter the loaded dataset, then
// derive the summary and every chart grouping from scratch.
//
// CRITICAL RULES:
// - Reads the dataset, never mutates it
// - No aggregate survives between queries
// - Season trends and filter options ignore the filter state

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::domain::filter::{apply_filters, FilterState};
use crate::domain::movie::MovieRecord;
use crate::domain::statistics::{
    filter_options, group_by_genre, group_by_origin, group_by_presenter, group_by_season,
    summarize, top_origins, watch_time_by_season, AggregateSummary, DashboardSnapshot,
    FilterOptions, Groupings,
};
use crate::error::AppResult;
use crate::events::{DashboardComputed, EventBus};
use crate::services::DatasetService;

/// Build the full dashboard for `filters` over `records`.
pub fn build_snapshot(
    records: &[MovieRecord],
    filters: &FilterState,
    config: &DashboardConfig,
) -> DashboardSnapshot {
    let filtered = apply_filters(records, filters);
    let view = || filtered.iter().copied();

    let groupings = Groupings {
        genres: group_by_genre(view(), config.genre_limit),
        origins: group_by_origin(view()),
        top_origins: top_origins(view(), config.origin_chart_limit),
        presenters: group_by_presenter(view(), config.presenter_limit),
        seasons: group_by_season(records),
        watch_time_by_season: watch_time_by_season(view()),
    };

    DashboardSnapshot {
        filters: filters.clone(),
        summary: summarize(view()),
        groupings,
        movies: filtered.into_iter().cloned().collect(),
        options: filter_options(records),
    }
}

pub struct DashboardService {
    dataset_service: Arc<DatasetService>,
    event_bus: Arc<EventBus>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(
        dataset_service: Arc<DatasetService>,
        event_bus: Arc<EventBus>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            dataset_service,
            event_bus,
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Everything the dashboard shows for `filters`.
    pub fn query(&self, filters: &FilterState) -> AppResult<DashboardSnapshot> {
        let dataset = self.dataset_service.current()?;
        let snapshot = build_snapshot(dataset.records(), filters, &self.config);

        log::debug!(
            "Dashboard for season={} presenter={} search={:?}: {}/{} movies",
            filters.season,
            filters.presenter,
            filters.search_text,
            snapshot.summary.total_movies,
            dataset.len()
        );

        self.event_bus.emit(DashboardComputed::new(
            filters.season.to_string(),
            filters.presenter.to_string(),
            filters.search_text.clone(),
            snapshot.summary.total_movies,
            dataset.len(),
        ));

        Ok(snapshot)
    }

    pub fn summary(&self, filters: &FilterState) -> AppResult<AggregateSummary> {
        let dataset = self.dataset_service.current()?;
        Ok(summarize(apply_filters(dataset.records(), filters)))
    }

    /// Filtered records in sheet order.
    pub fn filtered_movies(&self, filters: &FilterState) -> AppResult<Vec<MovieRecord>> {
        let dataset = self.dataset_service.current()?;
        Ok(apply_filters(dataset.records(), filters)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn filter_options(&self) -> AppResult<FilterOptions> {
        Ok(self.dataset_service.current()?.options())
    }
}
