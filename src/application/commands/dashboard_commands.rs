// src/application/commands/dashboard_commands.rs

use crate::application::{
    dto::*,
    error_handling::ToErrorResponse,
    state::AppState,
};
use crate::domain::filter::FilterState;

/// Read and normalize the dataset. Returns the number of movies.
pub fn load_dataset(state: &AppState) -> Result<usize, String> {
    let dataset = state.dataset_service.load().to_error_response()?;
    Ok(dataset.len())
}

/// Full dashboard for one filter selection
pub fn get_dashboard(state: &AppState, filters: FilterDto) -> Result<DashboardDto, String> {
    let filters = FilterState::from(filters);
    let snapshot = state
        .dashboard_service
        .query(&filters)
        .to_error_response()?;

    Ok(DashboardDto::from_snapshot(
        snapshot,
        state.dashboard_service.config(),
    ))
}

/// Summary cards only
pub fn get_summary(state: &AppState, filters: FilterDto) -> Result<SummaryDto, String> {
    let filters = FilterState::from(filters);
    let summary = state
        .dashboard_service
        .summary(&filters)
        .to_error_response()?;

    Ok(SummaryDto::from(summary))
}

/// Movie table rows for one filter selection
pub fn list_movies(state: &AppState, filters: FilterDto) -> Result<Vec<MovieRowDto>, String> {
    let filters = FilterState::from(filters);
    let movies = state
        .dashboard_service
        .filtered_movies(&filters)
        .to_error_response()?;

    Ok(movies.into_iter().map(MovieRowDto::from).collect())
}

/// Values for the season and presenter selects
pub fn get_filter_options(state: &AppState) -> Result<FilterOptionsDto, String> {
    let options = state
        .dashboard_service
        .filter_options()
        .to_error_response()?;

    Ok(FilterOptionsDto::from(options))
}
