//! Handler for link visit statistics.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::stats::{StatsQueryParams, StatsResponse};
use crate::api::dto::visits::VisitInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves visit statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{id}`
///
/// # Query Parameters
///
/// - `start` (optional): first calendar day to include (`YYYY-MM-DD`, UTC)
/// - `end` (optional): last calendar day to include (`YYYY-MM-DD`, UTC)
///
/// # Response
///
/// Returns the link summary (with its unfiltered total visit count) and
/// the matching visit records, newest first.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StatsQueryParams>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .visit_service
        .stats(&id, params.start, params.end)
        .await?;

    Ok(Json(StatsResponse {
        link: stats.link.into(),
        visits: stats.visits.into_iter().map(VisitInfo::from).collect(),
    }))
}
