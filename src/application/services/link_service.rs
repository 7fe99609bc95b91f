//! Link registry service: creation, lookup, and listing of short links.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Service owning the set of links and their identifier space.
///
/// Handles destination URL validation, identifier generation, and short URL
/// construction from the configured base.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the externally shareable prefix for short URLs,
    /// e.g. `https://s.example.com`.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Registers a new short link for a destination URL.
    ///
    /// Validates that `original_url` parses as an absolute `http`/`https`
    /// URL, generates a unique identifier, and persists the link with a
    /// zero visit count. The identifier is immediately resolvable once this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or disallowed
    /// scheme; the registry is left unchanged.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_link(&self, original_url: String) -> Result<Link, AppError> {
        let validated_url = validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let id = self.generate_unique_id().await?;
        let short_url = self.build_short_url(&id);

        let link = Link::new(id, validated_url, short_url);
        self.repository.insert(&link).await?;

        Ok(link)
    }

    /// Retrieves a link by its short identifier.
    ///
    /// Pure lookup, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_link(&self, id: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Lists all links, most recently created first.
    ///
    /// Ties on `created_at` keep insertion order (stable sort over the
    /// store's insertion-ordered index). An empty store yields an empty
    /// vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        let mut links = self.repository.list().await?;
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(links)
    }

    /// Constructs the full short URL for an identifier.
    fn build_short_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }

    /// Generates an identifier with a defensive collision check.
    ///
    /// Collisions are vanishingly unlikely at 72 bits of entropy; the
    /// existence check and retry guard against generator misuse.
    async fn generate_unique_id(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let id = generate_id();

            if !self.repository.exists(&id).await? {
                return Ok(id);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique id",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::{Duration, Utc};

    fn create_test_link(id: &str, url: &str) -> Link {
        Link::new(
            id.to_string(),
            url.to_string(),
            format!("http://localhost:3000/{}", id),
        )
    }

    #[tokio::test]
    async fn test_create_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo
            .expect_insert()
            .withf(|link: &Link| {
                link.original_url == "https://example.com/"
                    && link.visit_count == 0
                    && link.id.len() == 12
                    && link.short_url == format!("http://localhost:3000/{}", link.id)
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.create_link("https://example.com".to_string()).await;

        assert!(result.is_ok());
        let link = result.unwrap();
        assert_eq!(link.original_url, "https://example.com/");
        assert_eq!(link.visit_count, 0);
    }

    #[tokio::test]
    async fn test_create_link_invalid_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.create_link("not-a-url".to_string()).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_link_rejects_ftp_scheme() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service
            .create_link("ftp://example.com/file.txt".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_link_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();

        let mut exists_results = vec![Ok(false), Ok(true)];
        mock_repo
            .expect_exists()
            .times(2)
            .returning(move |_| exists_results.pop().unwrap());
        mock_repo.expect_insert().times(1).returning(|_| Ok(()));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.create_link("https://example.com".to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        let link = create_test_link("abc123", "https://example.com");
        mock_repo
            .expect_find_by_id()
            .withf(|id: &str| id == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.get_link("abc123").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, "abc123");
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.get_link("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_links_sorted_newest_first() {
        let mut mock_repo = MockLinkRepository::new();

        let mut older = create_test_link("older1", "https://a.example.com");
        older.created_at = Utc::now() - Duration::hours(2);
        let mut newer = create_test_link("newer1", "https://b.example.com");
        newer.created_at = Utc::now() - Duration::hours(1);

        let links = vec![older, newer];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(links.clone()));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.list_links().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "newer1");
        assert_eq!(result[1].id, "older1");
    }

    #[tokio::test]
    async fn test_list_links_ties_keep_insertion_order() {
        let mut mock_repo = MockLinkRepository::new();

        let ts = Utc::now();
        let mut first = create_test_link("first1", "https://a.example.com");
        first.created_at = ts;
        let mut second = create_test_link("second1", "https://b.example.com");
        second.created_at = ts;

        let links = vec![first, second];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(links.clone()));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.list_links().await.unwrap();

        assert_eq!(result[0].id, "first1");
        assert_eq!(result[1].id, "second1");
    }

    #[tokio::test]
    async fn test_list_links_empty_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.list_links().await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_links_storage_error_not_masked() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::internal("Storage error", serde_json::json!({}))));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "http://localhost:3000".to_string(),
        );

        let result = service.list_links().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_short_url_base_trailing_slash() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_exists().returning(|_| Ok(false));
        mock_repo.expect_insert().returning(|_| Ok(()));

        let service = LinkService::new(
            Arc::new(mock_repo),
            "https://s.example.com/".to_string(),
        );

        let link = service
            .create_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.short_url, format!("https://s.example.com/{}", link.id));
    }
}
