//! API route definitions
//!
//! Endpoints for the tracking dashboard:
//! - /api/health - liveness
//! - /api/ships - enriched fleet
//! - /api/container - tolerant identifier resolution
//! - /api/weather - upstream conditions pass-through
//! - /api/summary - fleet roll-up sentence
//! - /api/backtest - model quality report

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Create the full application router.
pub fn router(state: ApiState) -> Router {
    Router::new().nest("/api", api_routes(state))
}

/// API routes, relative to the `/api` prefix.
fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/ships", get(handlers::get_ships))
        .route("/container", get(handlers::get_container))
        .route("/weather", get(handlers::get_weather))
        .route("/summary", post(handlers::post_summary))
        .route("/backtest", get(handlers::get_backtest))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherConfig;
    use crate::snapshot::FleetSnapshot;
    use crate::types::{EtaCoefficients, EtaModelConfig, RegionRiskTable};
    use crate::weather::WeatherClient;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> ApiState {
        let snapshot = FleetSnapshot {
            shipments: vec![serde_json::from_str(
                r#"{"id":"MSCU1301003","vessel":"MSC Aurora","lat":10.0,"lon":60.0,
                    "waypoint":{"lat":12.0,"lon":65.0},"speedKts":18.0,
                    "etaPlannedHrs":48.0,"containers":["MSCU1301003"],
                    "region":"Indian Ocean"}"#,
            )
            .unwrap()],
            model: EtaModelConfig {
                intercept: 2.0,
                coef: EtaCoefficients {
                    distance_nm: 0.01,
                    inv_speed: 5.0,
                    wind: 0.1,
                    congestion: 1.0,
                },
                sigma_hours: 2.5,
            },
            regions: RegionRiskTable::default(),
        };
        // Unroutable upstream: wind resolution exercises the fallback path
        let weather = WeatherClient::new(&WeatherConfig {
            base_url: "http://192.0.2.1:9".to_string(),
            timeout_secs: 1,
            fallback_wind_mps: 5.0,
        })
        .unwrap();
        ApiState {
            snapshot: Arc::new(snapshot),
            weather,
        }
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = router(test_state());
        let resp = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["data"]["ok"], true);
    }

    #[tokio::test]
    async fn test_ships_route_enriches_snapshot() {
        let app = router(test_state());
        let resp = app
            .oneshot(Request::builder().uri("/api/ships").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let items = v["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "MSCU1301003");
        assert!(items[0]["metrics"]["predHours"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_container_route_exact_match() {
        let app = router(test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/container?cn=1301003")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["data"]["tier"], "exact");
        assert_eq!(v["data"]["item"]["id"], "MSCU1301003");
    }

    #[tokio::test]
    async fn test_container_route_not_found() {
        let app = router(test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/container?cn=ZZZU0000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_summary_route() {
        let app = router(test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let txt = v["data"]["summary"].as_str().unwrap();
        assert!(txt.contains("1 shipments"), "{}", txt);
    }
}
