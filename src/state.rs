//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

/// Handles shared by all request handlers.
///
/// Both services hold the same store handle; they share no other state.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub link_repository: Arc<dyn LinkRepository>,
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state around a single link store.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(link_repository.clone())),
            link_repository,
            started_at: Instant::now(),
        }
    }
}
