//! Schedule-risk scoring
//!
//! Blends schedule drift, weather severity, and a per-region base rate into
//! a bounded score, then discretizes it into a three-level band.

use crate::types::{RegionRiskTable, RiskBand};

/// Wind speed at which weather severity saturates (m/s)
const WIND_SATURATION_MPS: f64 = 15.0;

/// Blend weights: drift dominates, then weather, then region base rate
const DRIFT_WEIGHT: f64 = 0.5;
const WEATHER_WEIGHT: f64 = 0.3;
const BASE_WEIGHT: f64 = 0.2;

/// Band cut-offs, inclusive on the lower bound of each band
const HIGH_THRESHOLD: f64 = 0.66;
const MED_THRESHOLD: f64 = 0.33;

/// Continuous score plus its discretized band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// Blended score in [0, 1]
    pub score: f64,
    pub band: RiskBand,
}

/// Score a shipment's schedule risk.
///
/// Only lateness counts: a prediction ahead of plan contributes zero drift.
/// Planned hours are floored at 1 so near-zero plans cannot blow up the
/// ratio. Weather severity is linear in wind and capped at 1.
pub fn score(
    pred_hours: f64,
    planned_hours: f64,
    wind_mps: f64,
    region: &str,
    regions: &RegionRiskTable,
) -> RiskAssessment {
    let drift = (pred_hours - planned_hours).max(0.0) / planned_hours.max(1.0);
    let weather = (wind_mps / WIND_SATURATION_MPS).min(1.0);
    let base = regions.base_for(region);

    let score =
        (DRIFT_WEIGHT * drift + WEATHER_WEIGHT * weather + BASE_WEIGHT * base).min(1.0);

    RiskAssessment {
        score,
        band: band_from_score(score),
    }
}

/// Discretize a score into its band. Boundaries are inclusive on the lower
/// bound: exactly 0.66 is HIGH, exactly 0.33 is MED.
pub fn band_from_score(score: f64) -> RiskBand {
    if score >= HIGH_THRESHOLD {
        RiskBand::High
    } else if score >= MED_THRESHOLD {
        RiskBand::Med
    } else {
        RiskBand::Low
    }
}
