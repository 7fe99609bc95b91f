//! Visit recording and statistics service.

use std::sync::Arc;

use crate::domain::entities::{Link, Visit};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;
use crate::utils::device_classifier::classify_device;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde_json::json;

/// Statistics for one link: its current summary plus the (possibly
/// range-filtered) visit records, newest first.
///
/// `link.visit_count` is always the unfiltered total, independent of any
/// date range applied to `visits`.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub visits: Vec<Visit>,
}

/// Service recording visits at redirect time and answering stats queries.
pub struct VisitService {
    link_repository: Arc<dyn LinkRepository>,
    visit_repository: Arc<dyn VisitRepository>,
}

impl VisitService {
    /// Creates a new visit service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        visit_repository: Arc<dyn VisitRepository>,
    ) -> Self {
        Self {
            link_repository,
            visit_repository,
        }
    }

    /// Resolves a short identifier and records the visit.
    ///
    /// Classifies the user agent, appends a visit to the link's log, and
    /// increments its counter, then returns the destination URL so the
    /// caller can issue the redirect. The two storage effects are each
    /// atomic per link; concurrent calls lose neither increments nor log
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier resolves to no
    /// link; no side effect occurs in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_and_record(
        &self,
        id: &str,
        user_agent: &str,
    ) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

        let visit = Visit::new(user_agent.to_string(), classify_device(user_agent));
        self.visit_repository.record(id, &visit).await?;

        Ok(link.original_url)
    }

    /// Retrieves statistics for a link, optionally filtered by an
    /// inclusive calendar-date range.
    ///
    /// Bare dates are interpreted as UTC calendar days: `start` includes
    /// visits from its first instant, and `end` includes visits through its
    /// last instant (implemented as an exclusive upper bound at the start
    /// of the following day). Both bounds are optional and independent.
    /// Visits are returned newest first; the summary carries the link's
    /// unfiltered total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier resolves to no link.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn stats(
        &self,
        id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<LinkStats, AppError> {
        let link = self
            .link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

        let mut visits = self.visit_repository.log(id).await?;

        let start_bound = start.map(start_of_day_utc);
        // A date at the calendar maximum has no representable next day; it
        // already includes every later visit, so the bound is dropped.
        let end_bound = end
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .map(start_of_day_utc);

        visits.retain(|v| {
            start_bound.is_none_or(|s| v.timestamp >= s)
                && end_bound.is_none_or(|e| v.timestamp < e)
        });
        visits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(LinkStats { link, visits })
    }
}

fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
