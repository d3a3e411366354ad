//! Link creation, lookup and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_code};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use tracing::{info, warn};

/// Number of random candidates drawn before giving up on generation.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for allocating short codes and managing links.
///
/// Code uniqueness is decided by the store's insert, never by the existence
/// check done while generating. A code that loses a race between the check
/// and the insert surfaces as [`AppError::CodeConflict`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute URL to redirect to, stored verbatim
    /// - `requested_code` - Optional code chosen by the caller
    ///
    /// # Code Allocation
    ///
    /// - If `requested_code` is provided, it is validated and inserted as-is
    /// - Otherwise a random 6-character code is generated; candidates already
    ///   present in the store are redrawn, up to [`MAX_GENERATION_ATTEMPTS`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL or the requested code is
    /// malformed. Nothing touches the store in that case.
    ///
    /// Returns [`AppError::CodeConflict`] if the store rejects the code.
    ///
    /// Returns [`AppError::AllocationExhausted`] if every generated candidate
    /// was taken.
    pub async fn create_link(
        &self,
        target_url: &str,
        requested_code: Option<&str>,
    ) -> Result<Link, AppError> {
        validate_target_url(target_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "target_url": target_url }))
        })?;

        let code = match requested_code {
            Some(code) => {
                validate_code(code)?;
                code.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        let new_link = NewLink {
            code,
            target_url: target_url.to_string(),
        };

        match self.link_repository.insert(new_link.clone()).await {
            Ok(link) => {
                info!(code = %link.code, "Link created");
                Ok(link)
            }
            Err(AppError::CodeConflict { details, .. }) => {
                warn!(code = %new_link.code, "Code already taken at insert");
                Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": new_link.code, "store": details }),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Lists all live links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_live().await
    }

    /// Retrieves a live link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live link holds the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_live(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Soft-deletes a link. The code stays reserved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live link holds the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.soft_delete(code).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        info!(code, "Link deleted");
        Ok(())
    }

    /// Draws random candidates until one is absent from the store.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if !self.link_repository.code_exists(&code).await? {
                return Ok(code);
            }

            warn!(attempt, code = %code, "Generated code collision");
        }

        Err(AppError::exhausted(
            "Unable to generate unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
