//! Redis-backed visit repository.
//!
//! Key layout:
//!
//! - `visits:{id}` - list of JSON visit documents in append order
//! - `link:{id}` hash field `visit_count` - incremented via `HINCRBY`
//!
//! `RPUSH` and `HINCRBY` are each single atomic server-side operations, so
//! concurrent redirects on the same link can neither overwrite each other's
//! log entries nor lose counter increments. The two commands are pipelined
//! in one round trip but deliberately not wrapped in a transaction: a brief
//! window where one effect is visible before the other is acceptable for
//! the analytics display.

use super::redis_store::RedisStore;
use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::{AppError, map_redis_error};
use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::json;
use tracing::warn;

pub struct RedisVisitRepository {
    store: RedisStore,
}

impl RedisVisitRepository {
    pub fn new(store: RedisStore) -> Self {
        Self { store }
    }

    fn visits_key(link_id: &str) -> String {
        format!("visits:{}", link_id)
    }

    fn link_key(link_id: &str) -> String {
        format!("link:{}", link_id)
    }
}

#[async_trait]
impl VisitRepository for RedisVisitRepository {
    async fn record(&self, link_id: &str, visit: &Visit) -> Result<(), AppError> {
        let mut conn = self.store.connection();

        let payload = serde_json::to_string(visit).map_err(|e| {
            AppError::internal(
                "Failed to serialize visit",
                json!({ "reason": e.to_string() }),
            )
        })?;

        redis::pipe()
            .rpush(Self::visits_key(link_id), payload)
            .hincr(Self::link_key(link_id), "visit_count", 1)
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_redis_error)?;

        Ok(())
    }

    async fn log(&self, link_id: &str) -> Result<Vec<Visit>, AppError> {
        let mut conn = self.store.connection();

        let entries: Vec<String> = conn
            .lrange(Self::visits_key(link_id), 0, -1)
            .await
            .map_err(map_redis_error)?;

        Ok(parse_log_entries(link_id, &entries))
    }
}

/// Deserializes raw log entries, skipping malformed ones.
///
/// One corrupt entry must not make the rest of the log unreadable.
fn parse_log_entries(link_id: &str, entries: &[String]) -> Vec<Visit> {
    entries
        .iter()
        .filter_map(|entry| match serde_json::from_str::<Visit>(entry) {
            Ok(visit) => Some(visit),
            Err(e) => {
                warn!("Skipping malformed visit entry for {}: {}", link_id, e);
                None
            }
        })
        .collect()
}
