//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counters.
///
/// `total_clicks` and `last_clicked` are only ever changed by the redirect
/// path; `code`, `target_url` and `created_at` never change after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: u64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Link {
    /// Creates a link that has never been clicked.
    pub fn new(id: i64, code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            target_url,
            total_clicks: 0,
            last_clicked: None,
            created_at,
            deleted: false,
        }
    }

    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Records one successful redirect at `at`.
    pub fn record_click(&mut self, at: DateTime<Utc>) {
        self.total_clicks = self.total_clicks.saturating_add(1);
        self.last_clicked = Some(at);
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());
        assert_eq!(link.created_at, now);
        assert!(!link.is_deleted());
    }

    #[test]
    fn test_record_click() {
        let mut link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );
        let at = Utc::now();

        link.record_click(at);
        link.record_click(at);

        assert_eq!(link.total_clicks, 2);
        assert_eq!(link.last_clicked, Some(at));
    }
}
