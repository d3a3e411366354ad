//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
///
/// Only the shape is checked here. `target_url` is optional at the serde
/// level so that a missing field reaches the handler and is reported as
/// `target_url required`; URL and code rules live in
/// [`LinkService::create_link`](crate::application::services::LinkService::create_link).
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Absolute URL to redirect to.
    pub target_url: Option<String>,

    /// Optional short code, 6-8 alphanumeric characters.
    pub code: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub total_clicks: u64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}
