// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod dashboard_service;
pub mod dataset_service;


pub use dataset_service::{normalize_records, Dataset, DatasetService, NormalizationReport};

pub use dashboard_service::{build_snapshot, DashboardService};
