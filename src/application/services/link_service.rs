//! Link creation, lookup, redirect, and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewClick, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{GENERATED_ALIAS_LENGTH, generate_code};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Service for managing shortened links.
///
/// Orchestrates alias assignment (collision check + generation retry),
/// lookups, expiry enforcement on redirect, click accounting, and deletion.
/// Input validation (URL syntax, alias length) happens at the API boundary
/// before any of these methods are reached.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Creates a short link.
    ///
    /// # Alias Assignment
    ///
    /// - If `alias` is provided, an existing link with the same alias is a
    ///   conflict. The check is a fast path only; the store's unique
    ///   constraint settles concurrent creations.
    /// - Otherwise an 8-character alias is generated, retrying on collision
    ///   up to 10 times before failing.
    ///
    /// An `expires_at` in the past is accepted: the link is created already
    /// expired.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on database errors or generation
    /// exhaustion.
    pub async fn create_link(
        &self,
        original_url: String,
        alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        let alias = if let Some(custom) = alias {
            if self
                .link_repository
                .find_by_alias(&custom)
                .await?
                .is_some()
            {
                return Err(AppError::conflict(
                    "Alias already exists",
                    json!({ "alias": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_alias().await?
        };

        let new_link = NewLink {
            alias,
            original_url,
            expires_at,
        };

        self.link_repository.create(new_link).await
    }

    /// Retrieves a link by its alias.
    ///
    /// Expiry is not checked here; expired links stay visible to metadata,
    /// analytics, and deletion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the alias.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link_by_alias(&self, alias: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| not_found(alias))
    }

    /// Lists all links in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Resolves a redirect: returns the original URL and records the click.
    ///
    /// An expired link yields the same NotFound as a missing one, so callers
    /// cannot distinguish the two. On success the click counter is
    /// incremented and a click event is appended with `client_ip`; the two
    /// writes are sequential, not transactional.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown or expired.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn redirect(&self, alias: &str, client_ip: String) -> Result<String, AppError> {
        let link = self.get_link_by_alias(alias).await?;

        if link.is_expired() {
            return Err(not_found(alias));
        }

        self.link_repository.increment_click_count(link.id).await?;

        self.click_repository
            .record(NewClick {
                link_id: link.id,
                ip: client_ip,
            })
            .await?;

        Ok(link.original_url)
    }

    /// Deletes a link; its click events are removed by cascade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the alias.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, alias: &str) -> Result<(), AppError> {
        let link = self.get_link_by_alias(alias).await?;

        self.link_repository.delete(link.id).await
    }

    /// Generates an unused alias with collision retry.
    async fn generate_unique_alias(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let alias = generate_code(GENERATED_ALIAS_LENGTH);

            if self.link_repository.find_by_alias(&alias).await?.is_none() {
                return Ok(alias);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// The uniform NotFound for unknown and expired aliases.
fn not_found(alias: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "alias": alias }))
}
