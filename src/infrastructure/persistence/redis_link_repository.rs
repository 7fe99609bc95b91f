//! Redis-backed link repository.
//!
//! Key layout:
//!
//! - `link:{id}` - hash with the link record (`id`, `original_url`,
//!   `created_at`, `visit_count`, `short_url`)
//! - `links:index` - list of all ids in insertion order, for enumeration

use super::redis_store::RedisStore;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_redis_error};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use redis::AsyncCommands;
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

const INDEX_KEY: &str = "links:index";

pub struct RedisLinkRepository {
    store: RedisStore,
}

impl RedisLinkRepository {
    pub fn new(store: RedisStore) -> Self {
        Self { store }
    }

    fn link_key(id: &str) -> String {
        format!("link:{}", id)
    }
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn insert(&self, link: &Link) -> Result<(), AppError> {
        let mut conn = self.store.connection();

        let created_at = link
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        redis::pipe()
            .atomic()
            .hset_multiple(
                Self::link_key(&link.id),
                &[
                    ("id", link.id.as_str()),
                    ("original_url", link.original_url.as_str()),
                    ("created_at", created_at.as_str()),
                    ("visit_count", "0"),
                    ("short_url", link.short_url.as_str()),
                ],
            )
            .rpush(INDEX_KEY, &link.id)
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_redis_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let mut conn = self.store.connection();

        let fields: HashMap<String, String> = conn
            .hgetall(Self::link_key(id))
            .await
            .map_err(map_redis_error)?;

        if fields.is_empty() {
            return Ok(None);
        }

        Ok(Some(link_from_fields(id, fields)?))
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let mut conn = self.store.connection();

        conn.exists(Self::link_key(id))
            .await
            .map_err(map_redis_error)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut conn = self.store.connection();

        let ids: Vec<String> = conn
            .lrange(INDEX_KEY, 0, -1)
            .await
            .map_err(map_redis_error)?;

        let mut links = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.find_by_id(id).await? {
                Some(link) => links.push(link),
                // Index and records are written together; an indexed id
                // without a record indicates external tampering.
                None => warn!("Indexed link {} has no record, skipping", id),
            }
        }

        Ok(links)
    }
}

fn link_from_fields(id: &str, fields: HashMap<String, String>) -> Result<Link, AppError> {
    let get = |name: &str| {
        fields.get(name).cloned().ok_or_else(|| {
            AppError::internal(
                "Corrupt link record",
                json!({ "id": id, "missing_field": name }),
            )
        })
    };

    let created_at = DateTime::parse_from_rfc3339(&get("created_at")?)
        .map_err(|e| {
            AppError::internal(
                "Corrupt link record",
                json!({ "id": id, "reason": e.to_string() }),
            )
        })?
        .with_timezone(&Utc);

    let visit_count = get("visit_count")?.parse::<u64>().map_err(|e| {
        AppError::internal(
            "Corrupt link record",
            json!({ "id": id, "reason": e.to_string() }),
        )
    })?;

    Ok(Link {
        id: get("id")?,
        original_url: get("original_url")?,
        created_at,
        visit_count,
        short_url: get("short_url")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_key_format() {
        assert_eq!(RedisLinkRepository::link_key("abc123"), "link:abc123");
    }

    #[test]
    fn test_link_from_fields_complete() {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), "abc123".to_string());
        fields.insert(
            "original_url".to_string(),
            "https://example.com/".to_string(),
        );
        fields.insert(
            "created_at".to_string(),
            "2024-06-01T12:30:45.123Z".to_string(),
        );
        fields.insert("visit_count".to_string(), "7".to_string());
        fields.insert(
            "short_url".to_string(),
            "http://localhost:3000/abc123".to_string(),
        );

        let link = link_from_fields("abc123", fields).unwrap();

        assert_eq!(link.id, "abc123");
        assert_eq!(link.visit_count, 7);
        assert_eq!(
            link.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "2024-06-01T12:30:45.123Z"
        );
    }

    #[test]
    fn test_link_from_fields_missing_field() {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), "abc123".to_string());

        let result = link_from_fields("abc123", fields);

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_link_from_fields_bad_count() {
        let mut fields = HashMap::new();
        fields.insert("id".to_string(), "abc123".to_string());
        fields.insert(
            "original_url".to_string(),
            "https://example.com/".to_string(),
        );
        fields.insert(
            "created_at".to_string(),
            "2024-06-01T12:30:45.123Z".to_string(),
        );
        fields.insert("visit_count".to_string(), "minus-one".to_string());
        fields.insert(
            "short_url".to_string(),
            "http://localhost:3000/abc123".to_string(),
        );

        let result = link_from_fields("abc123", fields);

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
