// src/events/types.rs
//
// Dashboard events.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// DATASET EVENTS
// ============================================================================

/// Emitted after the raw sheet has been read and normalized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub record_count: usize,
    /// Records whose presenter spelling was rewritten
    pub canonicalized_presenters: usize,
    /// Records kept despite a blank title
    pub untitled_records: usize,
}

impl DatasetLoaded {
    pub fn new(record_count: usize, canonicalized_presenters: usize, untitled_records: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            record_count,
            canonicalized_presenters,
            untitled_records,
        }
    }
}

impl DomainEvent for DatasetLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DatasetLoaded" }
}

// ============================================================================
// DASHBOARD EVENTS
// ============================================================================

/// Emitted every time aggregates are recomputed for a filter state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardComputed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub season: String,
    pub presenter: String,
    pub search_text: String,
    pub matched: usize,
    pub total: usize,
}

impl DashboardComputed {
    pub fn new(
        season: String,
        presenter: String,
        search_text: String,
        matched: usize,
        total: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            season,
            presenter,
            search_text,
            matched,
            total,
        }
    }
}

impl DomainEvent for DashboardComputed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DashboardComputed" }
}
