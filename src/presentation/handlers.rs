// HTTP request handlers
use crate::application::city_provider::ProviderError;
use crate::domain::filter::Timeframe;
use crate::domain::geo::Canvas;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TimeseriesQuery {
    pub timeframe: Option<String>,
}

#[derive(Deserialize)]
pub struct CanvasQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Map a provider failure onto the response the dashboard expects: a
/// backend status passes through, transport failures read as bad gateway,
/// and a malformed body is our problem, not the caller's.
fn error_response(e: ProviderError) -> (StatusCode, Json<ErrorBody>) {
    let status = match &e {
        ProviderError::Status { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ProviderError::Request(_) => StatusCode::BAD_GATEWAY,
        ProviderError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the tracked cities
pub async fn list_cities(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.city_service.list_cities().await {
        Ok(cities) => Json(cities).into_response(),
        Err(e) => {
            tracing::error!("listing cities failed: {}", e);
            error_response(e).into_response()
        }
    }
}

/// Current summary for one city
pub async fn city_summary(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.city_service.city_summary(&name).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            tracing::error!("summary fetch for {} failed: {}", name, e);
            error_response(e).into_response()
        }
    }
}

/// Ordered time series for one city
pub async fn city_timeseries(
    Path(name): Path<String>,
    Query(query): Query<TimeseriesQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let timeframe = match query.timeframe.as_deref() {
        None => Timeframe::default(),
        Some(raw) => match Timeframe::parse(raw) {
            Some(timeframe) => timeframe,
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: format!("unknown timeframe: {raw}"),
                    }),
                )
                    .into_response();
            }
        },
    };

    match state.city_service.city_timeseries(&name, timeframe).await {
        Ok(points) => Json(points).into_response(),
        Err(e) => {
            tracing::error!("time series fetch for {} failed: {}", name, e);
            error_response(e).into_response()
        }
    }
}

/// Aggregated overview for the card grid and map views
pub async fn dashboard_overview(
    Query(query): Query<CanvasQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let default = Canvas::default();
    let canvas = Canvas::new(
        query.width.unwrap_or(default.width),
        query.height.unwrap_or(default.height),
    );

    match state.dashboard_service.overview(canvas).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => {
            tracing::error!("building dashboard overview failed: {}", e);
            error_response(e).into_response()
        }
    }
}
