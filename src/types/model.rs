//! ETA model coefficients and region base-rate configuration
//!
//! Both structures are opaque configuration to the enrichment core: the
//! predictor is a fixed linear formula, never fit or updated here. Defaults
//! match the shipped `data/eta_model.json` so a missing optional field never
//! changes behavior.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default confidence-interval sigma when the model file omits it (hours)
pub const DEFAULT_SIGMA_HOURS: f64 = 2.5;

/// Base risk applied to regions missing from the table
pub const DEFAULT_REGION_RISK: f64 = 0.25;

/// Region tag assumed for shipments that carry none
pub const DEFAULT_REGION: &str = "Indian Ocean";

/// Linear coefficients of the ETA predictor, keyed by feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtaCoefficients {
    /// Hours per nautical mile of remaining distance
    pub distance_nm: f64,
    /// Hours per unit of inverse speed (1 / knots)
    pub inv_speed: f64,
    /// Hours per m/s of wind
    pub wind: f64,
    /// Hours per unit of congestion index
    pub congestion: f64,
}

/// Full ETA model configuration, loaded from `eta_model.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtaModelConfig {
    /// Intercept term (hours)
    pub intercept: f64,
    /// Feature coefficients
    pub coef: EtaCoefficients,
    /// Standard deviation driving the 90% confidence interval (hours)
    #[serde(default = "default_sigma")]
    pub sigma_hours: f64,
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA_HOURS
}

/// Region name -> base risk in [0, 1], loaded from `region_risk.json`.
///
/// Lookups never fail: unknown regions resolve to [`DEFAULT_REGION_RISK`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionRiskTable(HashMap<String, f64>);

impl RegionRiskTable {
    pub fn new(table: HashMap<String, f64>) -> Self {
        Self(table)
    }

    /// Base risk for a region, falling back to the documented default.
    pub fn base_for(&self, region: &str) -> f64 {
        self.0.get(region).copied().unwrap_or(DEFAULT_REGION_RISK)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
