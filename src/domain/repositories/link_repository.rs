//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// Implementations must enforce uniqueness of `code` themselves (a database
/// constraint, or an equivalent check under the same lock as the write).
/// Callers never rely on a prior [`Self::code_exists`] call for correctness.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken, by a
    /// live or a deleted link.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns true if any row, live or deleted, holds `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a live (non-deleted) link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_live(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all live links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_live(&self) -> Result<Vec<Link>, AppError>;

    /// Marks a link as deleted.
    ///
    /// Returns `Ok(true)` if a live link was deleted, `Ok(false)` if no live
    /// link holds `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn soft_delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically looks up the live link for `code`, increments its click
    /// counter and stamps `last_clicked`.
    ///
    /// Returns the updated link, or `Ok(None)` without touching any row when
    /// no live link holds `code`. On error nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store or transaction fails.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Cheap connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
