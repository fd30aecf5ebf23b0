//! Service Configuration
//!
//! TOML-backed settings for everything around the core: where the snapshot
//! lives, where the server binds, and how the weather collaborator behaves.
//! Every field has a built-in default so the service runs with no config
//! file at all.
//!
//! ## Loading Order
//!
//! 1. `HARBORWATCH_CONFIG` environment variable (path to TOML file)
//! 2. `harborwatch.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded config is passed explicitly to whoever needs it - there is no
//! process-wide config singleton.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable naming an explicit config path
pub const CONFIG_ENV: &str = "HARBORWATCH_CONFIG";

/// Default config file searched in the working directory
pub const CONFIG_FILE: &str = "harborwatch.toml";

/// Root service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub weather: WeatherConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API listener
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Snapshot data location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding ships.json, eta_model.json, region_risk.json
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Upstream weather service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast endpoint base URL
    #[serde(default = "default_weather_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Wind estimate substituted when the upstream fetch fails (m/s)
    #[serde(default = "default_fallback_wind")]
    pub fallback_wind_mps: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            timeout_secs: default_weather_timeout(),
            fallback_wind_mps: default_fallback_wind(),
        }
    }
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_weather_timeout() -> u64 {
    15
}

fn default_fallback_wind() -> f64 {
    5.0
}

impl AppConfig {
    /// Load configuration following the documented search order.
    ///
    /// A missing file is normal (defaults apply); an unreadable or
    /// unparseable file is reported and defaults apply, so a config typo
    /// degrades loudly rather than killing startup.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        info!("no config file found, using built-in defaults");
        Self::default()
    }

    /// Load from an explicit path, falling back to defaults on error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<AppConfig>(&raw) {
                Ok(cfg) => {
                    info!(path = %path.display(), "configuration loaded");
                    cfg
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "config parse failed, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config read failed, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.data.dir, PathBuf::from("data"));
        assert!((cfg.weather.fallback_wind_mps - 5.0).abs() < f64::EPSILON);
        assert_eq!(cfg.weather.timeout_secs, 15);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            bind_addr = "127.0.0.1:9090"

            [weather]
            fallback_wind_mps = 7.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:9090");
        assert!((cfg.weather.fallback_wind_mps - 7.5).abs() < f64::EPSILON);
        // Untouched sections fall back
        assert_eq!(cfg.data.dir, PathBuf::from("data"));
        assert_eq!(cfg.weather.timeout_secs, 15);
    }

    #[test]
    fn test_unparseable_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "this is { not toml").unwrap();
        let cfg = AppConfig::load_from(&path);
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:8080");
    }
}
