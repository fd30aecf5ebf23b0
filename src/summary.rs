//! Human-readable summaries of enriched shipments
//!
//! Fixed-template sentences only - no model-generated text. The single-item
//! and fleet-wide variants are the two faces of one formatter; both are pure
//! functions of their inputs.

use chrono::{DateTime, Utc};

use crate::types::{EnrichedShipment, RiskBand};

/// Fixed fallback for an empty fleet
pub const NO_SHIPMENTS: &str = "No active shipments.";

/// One-sentence status for a single shipment.
pub fn format_shipment(shipment: &EnrichedShipment) -> String {
    let m = &shipment.metrics;
    let status = if m.on_time { "on schedule" } else { "running late" };
    let half_width = (m.ci90[1] - m.ci90[0]) / 2.0;

    format!(
        "{} ({}) is {}: ETA {} ({:.1}h +/-{:.1}h), risk {} ({:.2}), {:.0} nm to go at {:.1} kts.",
        shipment.vessel(),
        shipment.id(),
        status,
        m.eta_utc.format("%Y-%m-%d %H:%M UTC"),
        m.pred_hours,
        half_width,
        m.risk,
        m.risk_score,
        m.dist_nm,
        shipment.record.speed_kts,
    )
}

/// One-sentence roll-up of the whole fleet.
///
/// Reports count, on-time percentage (rounded to the nearest integer),
/// average predicted hours, HIGH-risk count, and the worst (highest
/// predicted-hours) shipment - ties keep the first occurrence. An empty
/// fleet yields [`NO_SHIPMENTS`] rather than dividing by zero.
pub fn format_fleet(fleet: &[EnrichedShipment], now: DateTime<Utc>) -> String {
    if fleet.is_empty() {
        return NO_SHIPMENTS.to_string();
    }

    let n = fleet.len();
    let on_time = fleet.iter().filter(|s| s.metrics.on_time).count();
    let high = fleet
        .iter()
        .filter(|s| s.metrics.risk == RiskBand::High)
        .count();
    let avg_hours = fleet.iter().map(|s| s.metrics.pred_hours).sum::<f64>() / n as f64;

    // Strict comparison keeps the first occurrence on ties
    let mut worst = &fleet[0];
    for s in &fleet[1..] {
        if s.metrics.pred_hours > worst.metrics.pred_hours {
            worst = s;
        }
    }

    let pct = (on_time as f64 / n as f64 * 100.0).round() as i64;

    format!(
        "As of {}, {} shipments; {} ({}%) on-time. Avg hours to ETA {:.1}. High risk: {}. Worst: {} ({}) ~{:.1}h.",
        now.format("%Y-%m-%d %H:%M UTC"),
        n,
        on_time,
        pct,
        avg_hours,
        high,
        worst.vessel(),
        worst.id(),
        worst.metrics.pred_hours,
    )
}
