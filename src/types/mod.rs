//! Shared data structures for the shipment enrichment pipeline
//!
//! This module defines the core types flowing through the engine:
//! - `ShipmentRecord`: raw snapshot input, one per tracked voyage
//! - `EtaModelConfig` / `RegionRiskTable`: opaque model configuration
//! - `EnrichedShipment` / `ShipmentMetrics`: enrichment output
//! - `Resolution`: tolerant identifier lookup outcome

mod model;
mod resolution;
mod shipment;

pub use model::*;
pub use resolution::*;
pub use shipment::*;
