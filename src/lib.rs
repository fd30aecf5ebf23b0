//! Harborwatch: Container Fleet Tracking Intelligence
//!
//! Deterministic enrichment and tolerant lookup for a small shipment fleet.
//!
//! ## Architecture
//!
//! - **Geodesy**: great-circle leg distance
//! - **Enrichment Pipeline**: linear ETA predictor + schedule-risk banding
//! - **Identifier Engine**: tiered resolution of user-typed container codes
//! - **Summary / Evaluation**: fixed-template reporting and model backtest
//! - **API / Weather**: the thin async collaborator layer around the core

pub mod api;
pub mod config;
pub mod enrichment;
pub mod evaluation;
pub mod geodesy;
pub mod identifier;
pub mod snapshot;
pub mod summary;
pub mod types;
pub mod weather;

// Re-export the service configuration
pub use config::AppConfig;

// Re-export commonly used types
pub use types::{
    EnrichedShipment, EtaModelConfig, MatchTier, RegionRiskTable, Resolution, RiskBand,
    ShipmentMetrics, ShipmentRecord, SuggestionStub, Waypoint,
};

// Re-export the core entry points
pub use enrichment::{enrich, enrich_fleet};
pub use identifier::resolve;
pub use snapshot::{FleetSnapshot, SnapshotError};
pub use weather::{WeatherClient, WeatherError};
