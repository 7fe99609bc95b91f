//! Repository trait for the per-link visit log.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and reading visits.
///
/// Each link owns an append-only ordered log of visits plus an atomic
/// visit counter. Both effects of [`VisitRepository::record`] must be
/// storage-side atomic operations (a single counter increment and a single
/// list append), never application-level read-modify-write, so concurrent
/// redirects on the same link lose no updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisVisitRepository`] - Redis implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit to the link's log and increments its visit counter.
    ///
    /// The caller is responsible for verifying that the link exists before
    /// recording; this method does not re-check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn record(&self, link_id: &str, visit: &Visit) -> Result<(), AppError>;

    /// Reads the full visit log for a link in append order.
    ///
    /// Individually malformed persisted entries are skipped (and logged)
    /// rather than failing the whole read. A link with no visits yields
    /// `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn log(&self, link_id: &str) -> Result<Vec<Visit>, AppError>;
}
