//! Root greeting endpoint.

/// Returns a plain-text service banner.
///
/// # Endpoint
///
/// `GET /`
pub async fn banner_handler() -> &'static str {
    "Hello shortener..."
}
