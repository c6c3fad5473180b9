// src/application/state.rs

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::events::EventBus;
use crate::repositories::MovieRepository;
use crate::services::{DashboardService, DatasetService};

/// Application state shared by every command.
/// All fields are Arc-wrapped so a host can hand clones to handlers.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub dataset_service: Arc<DatasetService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire services around a movie source. Nothing is loaded yet.
    pub fn new(movie_repo: Arc<dyn MovieRepository>, config: DashboardConfig) -> Self {
        let event_bus = Arc::new(EventBus::with_log_capacity(config.event_log_capacity));
        let dataset_service = Arc::new(DatasetService::new(movie_repo, Arc::clone(&event_bus)));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&dataset_service),
            Arc::clone(&event_bus),
            config,
        ));

        Self {
            event_bus,
            dataset_service,
            dashboard_service,
        }
    }
}
