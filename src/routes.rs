//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness: version and uptime
//! - `GET  /readyz`      - Readiness: link store reachable
//! - `/api/links*`       - Link management
//! - `GET  /{code}`      - Short link redirect
//!
//! Static paths win over `/{code}`, so `healthz` or `api` are never treated
//! as short codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, readiness_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and the CORS and tracing layers.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/readyz", get(readiness_handler))
        .nest("/api", api::routes::link_routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_origins))
}
