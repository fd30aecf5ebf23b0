//! Linear ETA predictor
//!
//! A fixed linear formula over (distance, inverse speed, wind, congestion),
//! parameterized entirely by [`EtaModelConfig`]. Nothing here is fit or
//! updated at runtime; the config is treated as opaque, pre-validated input.

use crate::types::EtaModelConfig;

/// Two-sided z-score for a 90% confidence interval
const Z_90: f64 = 1.64;

/// Floor applied to speed before inversion (knots)
const MIN_SPEED_KTS: f64 = 0.1;

/// Point prediction with its 90% confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtaPrediction {
    /// Predicted transit time (hours)
    pub hours: f64,
    /// [low, high] bounds in hours; always brackets `hours`
    pub ci90: [f64; 2],
}

/// Predict transit hours for the given voyage features.
///
/// Speed is floored at 0.1 kts before inversion so a stalled or malformed
/// record cannot divide by zero.
pub fn predict(
    distance_nm: f64,
    speed_kts: f64,
    wind_mps: f64,
    congestion_idx: f64,
    cfg: &EtaModelConfig,
) -> EtaPrediction {
    let inv_speed = 1.0 / speed_kts.max(MIN_SPEED_KTS);

    let hours = cfg.intercept
        + cfg.coef.distance_nm * distance_nm
        + cfg.coef.inv_speed * inv_speed
        + cfg.coef.wind * wind_mps
        + cfg.coef.congestion * congestion_idx;

    let spread = Z_90 * cfg.sigma_hours;
    EtaPrediction {
        hours,
        ci90: [hours - spread, hours + spread],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EtaCoefficients;

    fn test_model() -> EtaModelConfig {
        EtaModelConfig {
            intercept: 2.0,
            coef: EtaCoefficients {
                distance_nm: 0.01,
                inv_speed: 5.0,
                wind: 0.1,
                congestion: 1.0,
            },
            sigma_hours: 2.5,
        }
    }

    #[test]
    fn test_reference_prediction() {
        // 2 + 0.01*300 + 5*(1/18) + 0.1*5 + 1*0.25 = 6.02777...
        let p = predict(300.0, 18.0, 5.0, 0.25, &test_model());
        assert!((p.hours - 6.027_778).abs() < 1e-5, "hours={}", p.hours);
    }

    #[test]
    fn test_ci_brackets_prediction() {
        let p = predict(300.0, 18.0, 5.0, 0.25, &test_model());
        assert!(p.ci90[0] <= p.hours && p.hours <= p.ci90[1]);
        // Half-width is 1.64 * sigma
        assert!((p.ci90[1] - p.hours - 1.64 * 2.5).abs() < 1e-9);
        assert!((p.hours - p.ci90[0] - 1.64 * 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let cfg = test_model();
        let mut prev = predict(0.0, 18.0, 5.0, 0.25, &cfg).hours;
        for d in [10.0, 100.0, 500.0, 2500.0] {
            let h = predict(d, 18.0, 5.0, 0.25, &cfg).hours;
            assert!(h >= prev, "hours not monotonic at distance {}", d);
            prev = h;
        }
    }

    #[test]
    fn test_speed_floor_guards_inversion() {
        let cfg = test_model();
        let stalled = predict(300.0, 0.0, 5.0, 0.25, &cfg);
        let reversing = predict(300.0, -4.0, 5.0, 0.25, &cfg);
        assert!(stalled.hours.is_finite());
        // Both degenerate speeds hit the same floor
        assert!((stalled.hours - reversing.hours).abs() < 1e-12);
        // inv_speed contribution is 5.0 / 0.1 = 50 hours
        assert!((stalled.hours - (2.0 + 3.0 + 50.0 + 0.5 + 0.25)).abs() < 1e-9);
    }
}
