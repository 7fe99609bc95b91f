#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::sync::Arc;

use linktrack::application::services::{LinkService, VisitService};
use linktrack::domain::entities::{DeviceType, Link, Visit};
use linktrack::domain::repositories::{LinkRepository, VisitRepository};
use linktrack::infrastructure::persistence::MemoryStore;
use linktrack::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an application state backed by a fresh in-process store.
///
/// Returns the store handle as well so tests can seed and inspect it
/// directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());

    let link_repo: Arc<dyn LinkRepository> = store.clone();
    let visit_repo: Arc<dyn VisitRepository> = store.clone();

    let link_service = Arc::new(LinkService::new(link_repo.clone(), TEST_BASE_URL.to_string()));
    let visit_service = Arc::new(VisitService::new(link_repo, visit_repo));

    (AppState::new(link_service, visit_service), store)
}

pub async fn create_test_link(store: &MemoryStore, id: &str, url: &str) {
    let link = Link::new(
        id.to_string(),
        url.to_string(),
        format!("{}/{}", TEST_BASE_URL, id),
    );
    store.insert(&link).await.unwrap();
}

/// Appends a visit with a controlled timestamp, bypassing the redirect path.
pub async fn record_visit_at(store: &MemoryStore, id: &str, timestamp: DateTime<Utc>) {
    let visit = Visit {
        timestamp,
        user_agent: "TestBot/1.0".to_string(),
        device_type: DeviceType::Desktop,
    };
    store.record(id, &visit).await.unwrap();
}
