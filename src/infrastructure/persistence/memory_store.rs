//! In-process store for running without Redis.
//!
//! Used when no `REDIS_URL` is configured (development and integration
//! tests). Provides the same per-key guarantees the Redis layout does:
//! counter increments and log appends happen under the owning key's shard
//! lock, so concurrent redirects lose nothing.

use crate::domain::entities::{Link, Visit};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;

/// DashMap-backed store implementing both repository traits.
#[derive(Default)]
pub struct MemoryStore {
    links: DashMap<String, Link>,
    index: Mutex<Vec<String>>,
    visits: DashMap<String, Vec<Visit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        self.links.insert(link.id.clone(), link.clone());
        self.index.lock().push(link.id.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(id).map(|entry| entry.clone()))
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(id))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let ids = self.index.lock().clone();
        Ok(ids
            .iter()
            .filter_map(|id| self.links.get(id).map(|entry| entry.clone()))
            .collect())
    }
}

#[async_trait]
impl VisitRepository for MemoryStore {
    async fn record(&self, link_id: &str, visit: &Visit) -> Result<(), AppError> {
        self.visits
            .entry(link_id.to_string())
            .or_default()
            .push(visit.clone());

        if let Some(mut link) = self.links.get_mut(link_id) {
            link.visit_count += 1;
        }

        Ok(())
    }

    async fn log(&self, link_id: &str) -> Result<Vec<Visit>, AppError> {
        Ok(self
            .visits
            .get(link_id)
            .map(|entries| entries.clone())
            .unwrap_or_default())
    }
}
