//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0", "uptime_seconds": 12.5 }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
    })
}

/// Reports whether the link store is reachable.
///
/// # Endpoint
///
/// `GET /readyz`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store ping failed
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    match state.link_repository.ping().await {
        Ok(()) => Ok(Json(ReadinessResponse {
            ok: true,
            database: "ok",
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    ok: false,
                    database: "error",
                }),
            ))
        }
    }
}
