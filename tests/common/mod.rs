#![allow(dead_code)]

//! Shared test fixtures: an in-memory repository implementation standing in
//! for PostgreSQL, plus state/router builders.

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};

use snaplink::application::services::{LinkService, StatsService};
use snaplink::domain::entities::{Click, Link, NewClick, NewLink};
use snaplink::domain::repositories::{ClickRepository, LinkRepository};
use snaplink::error::AppError;
use snaplink::state::AppState;

pub const TEST_BASE_URL: &str = "https://s.test.com";

/// In-memory repository backing both store contracts.
///
/// Mirrors the database guarantees the service relies on: alias uniqueness
/// enforced at insert, cascade delete of clicks, recency-ordered click
/// queries.
#[derive(Default)]
pub struct InMemoryRepository {
    links: Mutex<Vec<Link>>,
    clicks: Mutex<Vec<Click>>,
    next_link_id: Mutex<i64>,
    next_click_id: Mutex<i64>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        // The unique-constraint stand-in.
        if links.iter().any(|l| l.alias == new_link.alias) {
            return Err(AppError::conflict(
                "Alias already exists",
                json!({ "constraint": "links_alias_key" }),
            ));
        }

        let mut next_id = self.next_link_id.lock().unwrap();
        *next_id += 1;

        let link = Link::new(
            *next_id,
            new_link.alias,
            new_link.original_url,
            Utc::now(),
            new_link.expires_at,
            0,
        );
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.alias == alias).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.lock().unwrap().clone())
    }

    async fn increment_click_count(&self, link_id: i64) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();
        if let Some(link) = links.iter_mut().find(|l| l.id == link_id) {
            link.click_count += 1;
        }
        Ok(())
    }

    async fn delete(&self, link_id: i64) -> Result<(), AppError> {
        self.links.lock().unwrap().retain(|l| l.id != link_id);
        // ON DELETE CASCADE
        self.clicks.lock().unwrap().retain(|c| c.link_id != link_id);
        Ok(())
    }
}

#[async_trait]
impl ClickRepository for InMemoryRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut next_id = self.next_click_id.lock().unwrap();
        *next_id += 1;

        let click = Click::new(*next_id, new_click.link_id, Utc::now(), new_click.ip);
        self.clicks.lock().unwrap().push(click.clone());

        Ok(click)
    }

    async fn find_recent(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let clicks = self.clicks.lock().unwrap();

        let mut recent: Vec<Click> = clicks
            .iter()
            .filter(|c| c.link_id == link_id)
            .cloned()
            .collect();
        recent.sort_by(|a, b| (b.clicked_at, b.id).cmp(&(a.clicked_at, a.id)));
        recent.truncate(limit as usize);

        Ok(recent)
    }
}

/// Builds the application state over a fresh in-memory repository.
pub fn create_test_state() -> (AppState, Arc<InMemoryRepository>) {
    let repository = Arc::new(InMemoryRepository::new());

    let link_repo: Arc<dyn LinkRepository> = repository.clone();
    let click_repo: Arc<dyn ClickRepository> = repository.clone();

    let link_service = Arc::new(LinkService::new(link_repo.clone(), click_repo.clone()));
    let stats_service = Arc::new(StatsService::new(link_repo, click_repo));

    let state = AppState::new(link_service, stats_service, TEST_BASE_URL.to_string());

    (state, repository)
}

/// Builds the full service router over a fresh in-memory repository.
pub fn create_test_app() -> Router {
    let (state, _repository) = create_test_state();
    snaplink::api::routes::routes().with_state(state)
}
