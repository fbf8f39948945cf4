//! ShortLink entity representing a persisted alias-to-URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored mapping between an alias and its original URL.
///
/// `alias` holds the full composed short URL as persisted by the service.
/// `expires_at` and `clicks` are stored but not evaluated by any logic yet.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: i64,
}

impl ShortLink {
    /// Creates a ShortLink with no expiry and a zero click counter.
    pub fn new(id: i64, original_url: String, alias: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            alias,
            created_at,
            expires_at: None,
            clicks: 0,
        }
    }
}

/// Input data for persisting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub original_url: String,
    pub alias: String,
}

impl NewShortLink {
    pub fn new(original_url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "https://example.com".to_string(),
            "http://localhost/abc12345".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.alias, "http://localhost/abc12345");
        assert_eq!(link.created_at, now);
        assert!(link.expires_at.is_none());
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_short_link_creation() {
        let new_link = NewShortLink::new("https://rust-lang.org", "http://localhost/rust");

        assert_eq!(new_link.original_url, "https://rust-lang.org");
        assert_eq!(new_link.alias, "http://localhost/rust");
    }
}
