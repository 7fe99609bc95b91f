//! Visit entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse classification of a visit's originating client.
///
/// Derived once from the user agent at record time and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
}

/// One recorded redirect event for a link.
///
/// Visits form an append-only log per link; they are never mutated or
/// deleted once appended. The raw user agent may be empty when the client
/// sent no header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub device_type: DeviceType,
}

impl Visit {
    /// Creates a Visit timestamped now.
    pub fn new(user_agent: String, device_type: DeviceType) -> Self {
        Self {
            timestamp: Utc::now(),
            user_agent,
            device_type,
        }
    }
}
