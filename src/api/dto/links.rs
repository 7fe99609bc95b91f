//! DTOs for link registration and listing.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to register a new short link.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// The destination URL (must be absolute HTTP/HTTPS).
    pub url: String,
}

/// A link as exposed over the API.
///
/// Timestamps serialize as ISO-8601 with millisecond precision.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub visit_count: u64,
    pub short_url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            created_at: link.created_at,
            visit_count: link.visit_count,
            short_url: link.short_url,
        }
    }
}

/// Response for the link listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkResponse>,
}
