//! DTOs for the statistics endpoint.

use super::links::LinkResponse;
use super::visits::VisitInfo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date-range query parameters for statistics.
///
/// Both bounds are optional calendar dates (`YYYY-MM-DD`) interpreted as
/// UTC days; `end` is inclusive through its last instant.
#[derive(Debug, Deserialize)]
pub struct StatsQueryParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Statistics for a single link.
///
/// `link.visit_count` is the unfiltered total; `visits` reflects the
/// requested date range, newest first.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub link: LinkResponse,
    pub visits: Vec<VisitInfo>,
}
