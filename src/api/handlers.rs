//! API request handlers
//!
//! Thin I/O plumbing over the pure core: each handler resolves a wind
//! estimate, enriches the snapshot, and serializes the result. No decision
//! logic lives here.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Response;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enrichment;
use crate::evaluation;
use crate::identifier;
use crate::snapshot::FleetSnapshot;
use crate::summary;
use crate::types::{EnrichedShipment, MatchTier, Resolution, SuggestionStub};
use crate::weather::WeatherClient;

use super::envelope::{ApiErrorResponse, ApiResponse};

// ============================================================================
// Shared State
// ============================================================================

/// State shared by all handlers: the immutable snapshot plus the weather
/// collaborator.
#[derive(Clone)]
pub struct ApiState {
    pub snapshot: Arc<FleetSnapshot>,
    pub weather: WeatherClient,
}

impl ApiState {
    /// Enrich the whole snapshot with one freshly resolved wind estimate.
    ///
    /// The estimate is fetched at the lead shipment's position; any upstream
    /// failure resolves to the configured fallback, so this never fails.
    async fn enriched_fleet(&self) -> Vec<EnrichedShipment> {
        let wind_mps = match self.snapshot.shipments.first() {
            Some(lead) => self.weather.wind_or_fallback(lead.lat, lead.lon).await,
            None => self.weather.fallback_wind(),
        };
        enrichment::enrich_fleet(
            &self.snapshot.shipments,
            wind_mps,
            &self.snapshot.model,
            &self.snapshot.regions,
            Utc::now(),
        )
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct HealthResponse {
    ok: bool,
    ts: String,
}

#[derive(Debug, Serialize)]
struct ShipsResponse {
    items: Vec<EnrichedShipment>,
}

#[derive(Debug, Deserialize)]
pub struct ContainerQuery {
    /// User-typed container or shipment code
    pub cn: String,
}

#[derive(Debug, Serialize)]
struct ContainerResponse {
    item: EnrichedShipment,
    tier: MatchTier,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alternates: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SuggestionsDetail {
    suggestions: Vec<SuggestionStub>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
struct SummaryResponse {
    summary: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /api/health` - liveness probe
pub async fn get_health() -> Response {
    ApiResponse::ok(HealthResponse {
        ok: true,
        ts: Utc::now().to_rfc3339(),
    })
}

/// `GET /api/ships` - the enriched fleet, in snapshot order
pub async fn get_ships(State(state): State<ApiState>) -> Response {
    let items = state.enriched_fleet().await;
    ApiResponse::ok(ShipsResponse { items })
}

/// `GET /api/container?cn=` - tolerant identifier resolution
///
/// The suggestion outcome is a 404 that carries candidates; it must never
/// read as a successful match.
pub async fn get_container(
    State(state): State<ApiState>,
    Query(query): Query<ContainerQuery>,
) -> Response {
    if query.cn.trim().is_empty() {
        return ApiErrorResponse::bad_request("query parameter `cn` is empty");
    }

    let fleet = state.enriched_fleet().await;
    match identifier::resolve(&query.cn, &fleet) {
        Resolution::Exact(item) => ApiResponse::ok(ContainerResponse {
            item,
            tier: MatchTier::Exact,
            alternates: Vec::new(),
        }),
        Resolution::Key10 { shipment, alternates } => {
            info!(query = %query.cn, alternates = alternates.len(), "fuzzy key10 match");
            ApiResponse::ok(ContainerResponse {
                item: shipment,
                tier: MatchTier::Key10,
                alternates,
            })
        }
        Resolution::Suggestions(suggestions) => {
            let detail = SuggestionsDetail { suggestions };
            match serde_json::to_value(&detail) {
                Ok(v) => ApiErrorResponse::not_found_with("no shipment matched", v),
                Err(_) => ApiErrorResponse::not_found("no shipment matched"),
            }
        }
        Resolution::NotFound => ApiErrorResponse::not_found("no shipment matched"),
    }
}

/// `GET /api/weather?lat&lon` - upstream current conditions, passed through
pub async fn get_weather(
    State(state): State<ApiState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    match state.weather.current(query.lat, query.lon).await {
        Ok(doc) => ApiResponse::ok(doc),
        Err(e) => ApiErrorResponse::bad_gateway(e.to_string()),
    }
}

/// `POST /api/summary` - fleet-wide roll-up sentence
pub async fn post_summary(State(state): State<ApiState>) -> Response {
    let fleet = state.enriched_fleet().await;
    let summary = summary::format_fleet(&fleet, Utc::now());
    ApiResponse::ok(SummaryResponse { summary })
}

/// `GET /api/backtest` - model quality report over the snapshot
pub async fn get_backtest(State(state): State<ApiState>) -> Response {
    let fleet = state.enriched_fleet().await;
    ApiResponse::ok(evaluation::backtest(&fleet))
}
