//! DTOs for link records and metadata projections.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// JSON representation of a link record, with the alias rendered as a full
/// short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub alias: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl LinkResponse {
    /// Builds the response from a link, rendering `short_url` against the
    /// configured base URL.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.alias);

        Self {
            alias: link.alias,
            short_url,
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            click_count: link.click_count,
        }
    }
}

/// Metadata projection returned by the info endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfoResponse {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}
