//! Click analytics service.

use std::sync::Arc;

use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Number of recent client IPs exposed by the analytics projection.
const RECENT_IPS_LIMIT: i64 = 5;

/// Lightweight analytics for a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytics {
    pub click_count: i64,
    /// Client IPs of the most recent clicks, most recent first, at most five.
    pub last_ips: Vec<String>,
}

/// Service for retrieving click analytics.
pub struct StatsService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Retrieves analytics for a link: total click count plus the IPs of the
    /// five most recent clicks, most recent first.
    ///
    /// Expiry is not checked; analytics stay available on expired links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the alias.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_analytics(&self, alias: &str) -> Result<Analytics, AppError> {
        let link = self
            .link_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "alias": alias }))
            })?;

        let clicks = self
            .click_repository
            .find_recent(link.id, RECENT_IPS_LIMIT)
            .await?;

        Ok(Analytics {
            click_count: link.click_count,
            last_ips: clicks.into_iter().map(|c| c.ip).collect(),
        })
    }
}
