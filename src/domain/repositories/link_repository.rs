//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Provides alias lookup, insert with a uniqueness guarantee, the click
/// counter update, deletion, and an unpaginated listing.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias already exists; the
    /// storage layer's unique constraint is the authoritative guard against
    /// concurrent creations racing past the existence check.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its exact alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Increments the click counter of a link by one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_click_count(&self, link_id: i64) -> Result<(), AppError>;

    /// Deletes a link; associated click events are removed by cascade.
    ///
    /// Deleting an id that no longer exists is a no-op at this layer; the
    /// service resolves the alias first and maps absence to NotFound.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, link_id: i64) -> Result<(), AppError>;
}
