//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code and record the click in one store transaction
/// 2. Return 302 Found with the stored target as `Location`, control
///    characters percent-encoded
///
/// The transaction has committed before the response is built. If the client
/// goes away earlier, the dropped transaction rolls back and no click is
/// counted.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the link was deleted.
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state
        .redirect_service
        .resolve_and_record_click(&code)
        .await?;

    let location = HeaderValue::try_from(encode_location(&target_url)).map_err(|_| {
        AppError::internal(
            "Stored target URL is not a valid header value",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Percent-encodes control characters so any stored target fits in a header.
///
/// New targets with control characters are refused at creation; this covers
/// rows written before that check existed.
fn encode_location(target_url: &str) -> String {
    let mut encoded = String::with_capacity(target_url.len());

    for ch in target_url.chars() {
        if ch.is_control() {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        } else {
            encoded.push(ch);
        }
    }

    encoded
}
