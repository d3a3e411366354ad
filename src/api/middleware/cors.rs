//! Cross-origin access for browser front ends.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer allowing the given origins.
///
/// Only `GET`, `POST` and `DELETE` with a `Content-Type` header are allowed.
/// Origins that are not valid header values are skipped; with no usable
/// origin, cross-origin requests get no CORS headers at all.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
