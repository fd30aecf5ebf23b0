//! Core shipment types: raw records, enrichment metrics, risk bands

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Raw Shipment Records (snapshot input)
// ============================================================================

/// Intermediate destination the vessel is currently steaming toward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// One tracked vessel voyage, as loaded from the fleet snapshot.
///
/// Records are immutable once loaded; every derived quantity lives in
/// [`ShipmentMetrics`] and is recomputed on each enrichment call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    /// Unique shipment identifier within the snapshot
    pub id: String,
    /// Vessel name for display
    pub vessel: String,
    /// Current position latitude (degrees)
    pub lat: f64,
    /// Current position longitude (degrees)
    pub lon: f64,
    /// Next waypoint on the planned route
    pub waypoint: Waypoint,
    /// Current speed over ground (knots)
    pub speed_kts: f64,
    /// Planned transit time to the waypoint (hours)
    pub eta_planned_hrs: f64,
    /// Container codes carried on this voyage (non-empty)
    pub containers: Vec<String>,
    /// Region tag for base-rate risk lookup; [`RegionRiskTable`] supplies
    /// a default when absent.
    ///
    /// [`RegionRiskTable`]: crate::types::RegionRiskTable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

// ============================================================================
// Risk Band
// ============================================================================

/// Discretized risk level for a shipment.
///
/// Banding of the continuous risk score at 0.33 and 0.66, lower bounds
/// inclusive: exactly 0.33 is `Med`, exactly 0.66 is `High`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    #[default]
    Low,
    Med,
    High,
}

impl RiskBand {
    /// Band label as it appears on the wire and in summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Med => "MED",
            RiskBand::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Enrichment Output
// ============================================================================

/// Derived metrics block attached to a shipment by the enrichment pipeline.
///
/// Always a pure function of (record, model config, region table, wind
/// estimate, wall-clock time) - no field survives from a prior computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentMetrics {
    /// Great-circle distance to the waypoint (nautical miles)
    pub dist_nm: f64,
    /// Predicted transit time (hours)
    pub pred_hours: f64,
    /// Absolute predicted arrival time (now + predicted hours)
    pub eta_utc: DateTime<Utc>,
    /// 90% confidence interval around the prediction, [low, high] hours
    pub ci90: [f64; 2],
    /// Predicted hours within 10% slack of the planned transit time
    pub on_time: bool,
    /// Discretized risk level
    pub risk: RiskBand,
    /// Underlying continuous risk score in [0, 1]
    pub risk_score: f64,
}

/// A shipment record together with its freshly computed metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedShipment {
    #[serde(flatten)]
    pub record: ShipmentRecord,
    pub metrics: ShipmentMetrics,
}

impl EnrichedShipment {
    /// Shipment identifier (convenience accessor for resolution/formatting)
    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Vessel name
    pub fn vessel(&self) -> &str {
        &self.record.vessel
    }
}
