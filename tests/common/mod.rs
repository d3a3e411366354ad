#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use tinylink::domain::entities::{Link, NewLink};
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::router;
use tinylink::state::AppState;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    (AppState::new(repo.clone()), repo)
}

pub fn make_router(state: AppState) -> Router {
    router(state, &[])
}

pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    (TestServer::new(make_router(state)).unwrap(), repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.insert(NewLink {
        code: code.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap()
}

/// A store whose every operation fails, as if the database were down.
pub struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn insert(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn code_exists(&self, _code: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn find_live(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn list_live(&self) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn soft_delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn record_click(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn make_unavailable_server() -> TestServer {
    let state = AppState::new(Arc::new(UnavailableRepository));
    TestServer::new(make_router(state)).unwrap()
}
