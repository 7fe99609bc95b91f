//! DTOs for individual visit records.

use crate::domain::entities::{DeviceType, Visit};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single visit as exposed over the API.
#[derive(Debug, Serialize)]
pub struct VisitInfo {
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub device_type: DeviceType,
}

impl From<Visit> for VisitInfo {
    fn from(visit: Visit) -> Self {
        Self {
            timestamp: visit.timestamp,
            user_agent: visit.user_agent,
            device_type: visit.device_type,
        }
    }
}
