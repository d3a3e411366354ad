//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, CODE_UNIQUE_CONSTRAINT};
use serde_json::json;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: HashMap<String, Link>,
}

/// A link store that keeps everything in memory.
///
/// Every operation runs under a single lock, which gives the same guarantees
/// the PostgreSQL store gets from its unique constraint and row locks:
/// duplicate codes are rejected at insert time and click increments never
/// interleave. Data is lost when the process exits.
///
/// # Use Cases
///
/// - Handler and service tests that should not need a database
/// - Local experiments
#[derive(Default)]
pub struct InMemoryLinkRepository {
    table: Mutex<Table>,
}

impl InMemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using InMemoryLinkRepository");
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut table = self.table.lock().await;

        if table.rows.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "constraint": CODE_UNIQUE_CONSTRAINT }),
            ));
        }

        table.next_id += 1;
        let link = Link::new(
            table.next_id,
            new_link.code.clone(),
            new_link.target_url,
            Utc::now(),
        );
        table.rows.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.table.lock().await.rows.contains_key(code))
    }

    async fn find_live(&self, code: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.lock().await;
        Ok(table.rows.get(code).filter(|l| !l.is_deleted()).cloned())
    }

    async fn list_live(&self) -> Result<Vec<Link>, AppError> {
        let table = self.table.lock().await;

        let mut links: Vec<Link> = table
            .rows
            .values()
            .filter(|l| !l.is_deleted())
            .cloned()
            .collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(links)
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let mut table = self.table.lock().await;

        match table.rows.get_mut(code) {
            Some(link) if !link.is_deleted() => {
                link.deleted = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut table = self.table.lock().await;

        match table.rows.get_mut(code) {
            Some(link) if !link.is_deleted() => {
                link.record_click(Utc::now());
                Ok(Some(link.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(code: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            target_url: "https://example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryLinkRepository::new();

        let link = repo.insert(new_link("abcdef")).await.unwrap();
        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());

        let found = repo.find_live("abcdef").await.unwrap();
        assert_eq!(found, Some(link));
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_conflicts() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("abcdef")).await.unwrap();

        let result = repo.insert(new_link("abcdef")).await;

        assert!(matches!(result, Err(AppError::CodeConflict { .. })));
        assert_eq!(repo.list_live().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_codes_are_case_sensitive() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("abcdef")).await.unwrap();

        assert!(repo.insert(new_link("ABCDEF")).await.is_ok());
    }

    #[tokio::test]
    async fn test_deleted_code_stays_reserved() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("abcdef")).await.unwrap();
        assert!(repo.soft_delete("abcdef").await.unwrap());

        assert!(repo.code_exists("abcdef").await.unwrap());
        assert!(repo.find_live("abcdef").await.unwrap().is_none());
        assert!(matches!(
            repo.insert(new_link("abcdef")).await,
            Err(AppError::CodeConflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_soft_delete_twice() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("abcdef")).await.unwrap();

        assert!(repo.soft_delete("abcdef").await.unwrap());
        assert!(!repo.soft_delete("abcdef").await.unwrap());
        assert!(!repo.soft_delete("zzzzzz").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_newest_first_without_deleted() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("first1")).await.unwrap();
        repo.insert(new_link("second")).await.unwrap();
        repo.insert(new_link("third3")).await.unwrap();
        repo.soft_delete("second").await.unwrap();

        let codes: Vec<String> = repo
            .list_live()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.code)
            .collect();

        assert_eq!(codes, vec!["third3", "first1"]);
    }

    #[tokio::test]
    async fn test_record_click_on_deleted_link() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("abcdef")).await.unwrap();
        repo.soft_delete("abcdef").await.unwrap();

        assert!(repo.record_click("abcdef").await.unwrap().is_none());
        assert!(repo.record_click("nope00").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sequential_clicks_advance_last_clicked() {
        let repo = InMemoryLinkRepository::new();
        repo.insert(new_link("abcdef")).await.unwrap();

        let first = repo.record_click("abcdef").await.unwrap().unwrap();
        let second = repo.record_click("abcdef").await.unwrap().unwrap();

        assert_eq!(first.total_clicks, 1);
        assert_eq!(second.total_clicks, 2);
        assert!(second.last_clicked >= first.last_clicked);

        let stored = repo.find_live("abcdef").await.unwrap().unwrap();
        assert_eq!(stored.last_clicked, second.last_clicked);
    }

    #[tokio::test]
    async fn test_concurrent_clicks_are_not_lost() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.insert(new_link("abcdef")).await.unwrap();

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.record_click("abcdef").await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_some());
        }

        let link = repo.find_live("abcdef").await.unwrap().unwrap();
        assert_eq!(link.total_clicks, 64);
        assert!(link.last_clicked.is_some());
    }
}
