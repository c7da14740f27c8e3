//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation: URL-safe characters only.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom alias (URL-safe, at most 20 characters).
    #[validate(length(min = 1, max = 20, message = "Alias must be 1-20 characters"))]
    #[validate(regex(
        path = "*ALIAS_REGEX",
        message = "Alias may only contain letters, digits, '-' and '_'"
    ))]
    pub alias: Option<String>,

    /// Optional expiry timestamp (RFC 3339). A past value is accepted; the
    /// link is then created already expired.
    pub expires_at: Option<DateTime<Utc>>,
}
