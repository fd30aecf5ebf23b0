//! Model backtest over the current snapshot
//!
//! Compares each shipment's predicted transit time against its planned time
//! and rolls the errors up into fleet-level quality metrics. The planned time
//! stands in for ground truth here - the snapshot carries no arrival
//! observations - so the report measures how far the model leans away from
//! the schedule, not true forecast accuracy.

use serde::Serialize;

use crate::types::{EnrichedShipment, RiskBand};

/// Delay ratio above which a prediction counts as a true late call
const LATE_DELAY_RATIO: f64 = 0.10;

/// How many of the largest predicted delays the precision metric inspects
const PRECISION_TOP_N: usize = 3;

/// Per-shipment backtest row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestRow {
    pub id: String,
    pub vessel: String,
    pub pred_hours: f64,
    pub planned_hours: f64,
    /// Signed prediction error: predicted - planned (hours)
    pub error_hours: f64,
    /// Positive part of the error, relative to the plan (floored at 1h)
    pub delay_ratio: f64,
    pub risk: RiskBand,
    pub band_score: f64,
}

/// Shipment count per risk band.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BandCounts {
    pub low: usize,
    pub med: usize,
    pub high: usize,
}

/// Fleet-level backtest report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestReport {
    /// Mean absolute prediction error (hours)
    pub mae_hours: f64,
    /// Share of the top-3 largest predicted delays whose delay ratio
    /// actually exceeds the 10% lateness threshold
    pub precision_at3: f64,
    /// |mean error| / max(mean planned, 1) - systematic lean of the model
    pub drift_ratio: f64,
    pub risk_bands: BandCounts,
    pub n: usize,
    pub rows: Vec<BacktestRow>,
}

/// Run the backtest over an enriched fleet.
///
/// An empty fleet produces a zeroed report; no division by zero.
pub fn backtest(fleet: &[EnrichedShipment]) -> BacktestReport {
    let mut rows: Vec<BacktestRow> = Vec::with_capacity(fleet.len());
    let mut bands = BandCounts::default();

    for s in fleet {
        let pred = s.metrics.pred_hours;
        let planned = s.record.eta_planned_hrs;
        let error = pred - planned;

        match s.metrics.risk {
            RiskBand::Low => bands.low += 1,
            RiskBand::Med => bands.med += 1,
            RiskBand::High => bands.high += 1,
        }

        rows.push(BacktestRow {
            id: s.record.id.clone(),
            vessel: s.record.vessel.clone(),
            pred_hours: pred,
            planned_hours: planned,
            error_hours: error,
            delay_ratio: error.max(0.0) / planned.max(1.0),
            risk: s.metrics.risk,
            band_score: s.metrics.risk_score,
        });
    }

    let n = rows.len();
    let mae_hours = rows.iter().map(|r| r.error_hours.abs()).sum::<f64>() / n.max(1) as f64;

    // Top-N rows by predicted delay, stable so ties keep input order
    let mut by_delay: Vec<&BacktestRow> = rows.iter().collect();
    by_delay.sort_by(|a, b| {
        b.error_hours
            .partial_cmp(&a.error_hours)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let precision_at3 = if rows.is_empty() {
        0.0
    } else {
        let late_calls = by_delay
            .iter()
            .take(PRECISION_TOP_N)
            .filter(|r| r.delay_ratio > LATE_DELAY_RATIO)
            .count();
        late_calls as f64 / PRECISION_TOP_N as f64
    };

    let mean_error = rows.iter().map(|r| r.error_hours).sum::<f64>() / n.max(1) as f64;
    let mean_planned = rows.iter().map(|r| r.planned_hours).sum::<f64>() / n.max(1) as f64;
    let drift_ratio = mean_error.abs() / mean_planned.max(1.0);

    BacktestReport {
        mae_hours,
        precision_at3,
        drift_ratio,
        risk_bands: bands,
        n,
        rows,
    }
}
