//! DTOs for health check endpoints.

use serde::Serialize;

/// Liveness response for `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
    pub uptime_seconds: f64,
}

/// Readiness response for `GET /readyz`.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ok: bool,
    pub database: &'static str,
}
