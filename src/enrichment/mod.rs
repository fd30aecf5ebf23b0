//! Shipment enrichment pipeline
//!
//! Orchestrates distance -> ETA prediction -> risk banding for one shipment
//! at a time: geodesy on the current leg, the linear predictor, an absolute
//! arrival timestamp, the on-time flag, and the risk band.
//!
//! Everything here is a pure function of its arguments. No I/O, no locks,
//! no shared state: enriching shipment A concurrently with shipment B needs
//! no coordination, and metrics are recomputed from scratch on every call.

pub mod eta;
pub mod risk;

use chrono::{DateTime, Duration, Utc};

use crate::geodesy;
use crate::types::{
    EnrichedShipment, EtaModelConfig, RegionRiskTable, ShipmentMetrics, ShipmentRecord,
    DEFAULT_REGION,
};

/// Congestion index fed to the predictor.
///
/// A deliberate constant placeholder - not derived from any traffic signal.
pub const CONGESTION_INDEX: f64 = 0.25;

/// Schedule slack tolerated before a shipment is flagged late (ratio)
pub const ON_TIME_SLACK: f64 = 1.1;

/// Enrich a single shipment record.
///
/// `wind_mps` is whatever estimate the caller resolved (live fetch or
/// fallback constant); `now` anchors the absolute ETA so the result is
/// reproducible under test.
pub fn enrich(
    record: &ShipmentRecord,
    wind_mps: f64,
    model: &EtaModelConfig,
    regions: &RegionRiskTable,
    now: DateTime<Utc>,
) -> EnrichedShipment {
    let dist_nm = geodesy::haversine_nm(
        record.lat,
        record.lon,
        record.waypoint.lat,
        record.waypoint.lon,
    );

    let prediction = eta::predict(dist_nm, record.speed_kts, wind_mps, CONGESTION_INDEX, model);

    let eta_utc = now + Duration::milliseconds((prediction.hours * 3_600_000.0) as i64);
    let on_time = prediction.hours <= record.eta_planned_hrs * ON_TIME_SLACK;

    let region = record.region.as_deref().unwrap_or(DEFAULT_REGION);
    let assessment = risk::score(
        prediction.hours,
        record.eta_planned_hrs,
        wind_mps,
        region,
        regions,
    );

    EnrichedShipment {
        record: record.clone(),
        metrics: ShipmentMetrics {
            dist_nm,
            pred_hours: prediction.hours,
            eta_utc,
            ci90: prediction.ci90,
            on_time,
            risk: assessment.band,
            risk_score: assessment.score,
        },
    }
}

/// Enrich a whole snapshot in input order.
///
/// Input order is preserved; downstream resolution and suggestion dedup
/// rely on it being stable across calls.
pub fn enrich_fleet(
    records: &[ShipmentRecord],
    wind_mps: f64,
    model: &EtaModelConfig,
    regions: &RegionRiskTable,
    now: DateTime<Utc>,
) -> Vec<EnrichedShipment> {
    records
        .iter()
        .map(|r| enrich(r, wind_mps, model, regions, now))
        .collect()
}
