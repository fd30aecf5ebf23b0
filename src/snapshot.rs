//! Fleet snapshot loading
//!
//! The shipment set is a static snapshot: three JSON files loaded whole at
//! startup and never written back. Records are validated on the way in so a
//! malformed file surfaces as a descriptive load error instead of NaN
//! metrics downstream.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::{EtaModelConfig, RegionRiskTable, ShipmentRecord};

/// Shipment list file name inside the data directory
pub const SHIPS_FILE: &str = "ships.json";
/// ETA model coefficients file name
pub const ETA_MODEL_FILE: &str = "eta_model.json";
/// Region base-rate file name
pub const REGION_RISK_FILE: &str = "region_risk.json";

/// Snapshot loading errors
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid shipment record #{index} ({id}): {reason}")]
    InvalidRecord {
        index: usize,
        id: String,
        reason: String,
    },
}

/// The full static input set: shipments, model, and region base rates.
///
/// Ordering of `shipments` follows the file and stays stable for the life of
/// the process - suggestion dedup order depends on it.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    pub shipments: Vec<ShipmentRecord>,
    pub model: EtaModelConfig,
    pub regions: RegionRiskTable,
}

impl FleetSnapshot {
    /// Load and validate a snapshot from `dir`.
    pub fn load(dir: &Path) -> Result<Self, SnapshotError> {
        let shipments: Vec<ShipmentRecord> = read_json(&dir.join(SHIPS_FILE))?;
        let model: EtaModelConfig = read_json(&dir.join(ETA_MODEL_FILE))?;
        let regions: RegionRiskTable = read_json(&dir.join(REGION_RISK_FILE))?;

        for (index, record) in shipments.iter().enumerate() {
            validate_record(index, record)?;
        }

        info!(
            shipments = shipments.len(),
            regions = regions.len(),
            dir = %dir.display(),
            "fleet snapshot loaded"
        );

        Ok(Self {
            shipments,
            model,
            regions,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_record(index: usize, record: &ShipmentRecord) -> Result<(), SnapshotError> {
    let fail = |reason: &str| {
        Err(SnapshotError::InvalidRecord {
            index,
            id: if record.id.is_empty() {
                "<empty>".to_string()
            } else {
                record.id.clone()
            },
            reason: reason.to_string(),
        })
    };

    if record.id.trim().is_empty() {
        return fail("identifier is empty");
    }
    if record.containers.is_empty() {
        return fail("container list is empty");
    }
    if !coordinate_ok(record.lat, 90.0) || !coordinate_ok(record.lon, 180.0) {
        return fail("current position out of range");
    }
    if !coordinate_ok(record.waypoint.lat, 90.0) || !coordinate_ok(record.waypoint.lon, 180.0) {
        return fail("waypoint out of range");
    }
    if !record.speed_kts.is_finite() || record.speed_kts <= 0.0 {
        return fail("speed must be a positive number of knots");
    }
    if !record.eta_planned_hrs.is_finite() || record.eta_planned_hrs <= 0.0 {
        return fail("planned transit time must be positive");
    }
    Ok(())
}

fn coordinate_ok(value: f64, bound: f64) -> bool {
    value.is_finite() && value.abs() <= bound
}
