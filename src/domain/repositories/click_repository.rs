//! Repository trait for click event storage.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a new click event with the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// `link_id` that references no existing link.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Returns the `limit` most recent click events for a link, ordered by
    /// `clicked_at` descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_recent(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;
}
