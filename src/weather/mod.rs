//! Weather collaborator - Open-Meteo client
//!
//! The enrichment core never performs I/O: it takes a wind estimate as a
//! plain number. This module is the async collaborator that produces that
//! number, with its own timeout and a documented fallback constant, plus the
//! raw current-conditions pass-through the map UI renders.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::WeatherConfig;

/// Current-conditions fields requested for the pass-through endpoint
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,wind_speed_10m,weather_code";

/// Weather client errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct WindResponse {
    current: WindCurrent,
}

#[derive(Debug, Deserialize)]
struct WindCurrent {
    wind_speed_10m: f64,
}

/// HTTP client for the upstream weather service.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    fallback_wind_mps: f64,
}

impl WeatherClient {
    /// Build a client from the weather section of the service config.
    pub fn new(cfg: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            fallback_wind_mps: cfg.fallback_wind_mps,
        })
    }

    /// The configured fallback wind estimate (m/s)
    pub fn fallback_wind(&self) -> f64 {
        self.fallback_wind_mps
    }

    /// Raw current-conditions document for a position, passed through
    /// unmodified for the caller to render.
    pub async fn current(&self, lat: f64, lon: f64) -> Result<serde_json::Value, WeatherError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(WeatherError::UpstreamStatus(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// Resolve one wind estimate (m/s) for enrichment.
    ///
    /// Any upstream failure - timeout, non-2xx, unexpected body - resolves
    /// to the configured fallback constant. The caller always gets a usable
    /// number; the core never sees the failure.
    pub async fn wind_or_fallback(&self, lat: f64, lon: f64) -> f64 {
        match self.fetch_wind(lat, lon).await {
            Ok(wind) if wind.is_finite() && wind >= 0.0 => {
                debug!(lat, lon, wind_mps = wind, "live wind estimate");
                wind
            }
            Ok(wind) => {
                warn!(lat, lon, wind_mps = wind, "implausible wind value, using fallback");
                self.fallback_wind_mps
            }
            Err(e) => {
                warn!(lat, lon, error = %e, fallback = self.fallback_wind_mps, "wind fetch failed, using fallback");
                self.fallback_wind_mps
            }
        }
    }

    async fn fetch_wind(&self, lat: f64, lon: f64) -> Result<f64, WeatherError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", "wind_speed_10m".to_string()),
                // Ask upstream for m/s so no unit conversion happens here
                ("wind_speed_unit", "ms".to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(WeatherError::UpstreamStatus(resp.status()));
        }
        let body: WindResponse = resp.json().await?;
        Ok(body.current.wind_speed_10m)
    }
}
