//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Maps a unique alias to its original URL. The alias is assigned once at
/// creation (caller-supplied or generated) and never changes; the only field
/// mutated afterwards is `click_count`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub alias: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        alias: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            alias,
            original_url,
            created_at,
            expires_at,
            click_count,
        }
    }

    /// Returns true if the link's expiry timestamp lies strictly in the past.
    ///
    /// Expiry only affects redirects; metadata, analytics, and deletion keep
    /// working on an expired link.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e < Utc::now())
    }
}

/// Input data for creating a new link.
///
/// `click_count` always starts at zero and is therefore not part of the input.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub alias: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            None,
            0,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.alias, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.click_count, 0);
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_is_expired_past_timestamp() {
        let link = Link::new(
            1,
            "old".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            Some(Utc::now() - Duration::seconds(1)),
            0,
        );
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_not_expired_future_timestamp() {
        let link = Link::new(
            1,
            "fresh".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            Some(Utc::now() + Duration::hours(1)),
            0,
        );
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_without_expiry_never_expires() {
        let link = Link::new(
            1,
            "keep".to_string(),
            "https://example.com".to_string(),
            Utc::now() - Duration::days(3650),
            None,
            42,
        );
        assert!(!link.is_expired());
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            alias: "xyz789".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            expires_at: None,
        };

        assert_eq!(new_link.alias, "xyz789");
        assert_eq!(new_link.original_url, "https://rust-lang.org");
        assert!(new_link.expires_at.is_none());
    }
}
