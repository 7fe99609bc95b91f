//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link registry.
///
/// Owns the set of links and their identifier space. Identifiers are
/// generated by the caller; the repository only guarantees durable storage
/// and enumeration in insertion order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a newly created link and registers its id in the global index.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn insert(&self, link: &Link) -> Result<(), AppError>;

    /// Finds a link by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError>;

    /// Checks whether an identifier is already taken.
    ///
    /// Used by the defensive collision retry during id generation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn exists(&self, id: &str) -> Result<bool, AppError>;

    /// Enumerates all links in insertion order.
    ///
    /// A store failure must surface as an error, never as a silently empty
    /// sequence. An empty store yields `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn list(&self) -> Result<Vec<Link>, AppError>;
}
