//! Redirect resolution and click accounting.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::debug;

/// Resolves codes to their targets and records a click for each redirect.
///
/// Lookup and increment happen in one store operation
/// ([`LinkRepository::record_click`]), so a click is counted exactly when a
/// target is returned. The service itself never redirects; the HTTP handler
/// does that once this call has returned.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Resolves `code` to its target URL and records one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live link holds the code; no row
    /// is changed.
    ///
    /// Returns [`AppError::Internal`] if the store fails; the click counter is
    /// left untouched. Not retried.
    pub async fn resolve_and_record_click(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        debug!(code, total_clicks = link.total_clicks, "Click recorded");

        Ok(link.target_url)
    }
}
