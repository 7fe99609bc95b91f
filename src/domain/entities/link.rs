//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered mapping from a generated short identifier to a destination URL.
///
/// A link is immutable after creation except for `visit_count`, which only
/// ever increases. `short_url` is computed once from the configured base and
/// stored alongside the record as a presentation convenience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub visit_count: u64,
    pub short_url: String,
}

impl Link {
    /// Creates a new Link with a zero visit count and `created_at = now`.
    pub fn new(id: String, original_url: String, short_url: String) -> Self {
        Self {
            id,
            original_url,
            created_at: Utc::now(),
            visit_count: 0,
            short_url,
        }
    }
}
