//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get, routing::post};

/// REST API routes.
///
/// # Endpoints
///
/// - `POST /links`       - Register a short link
/// - `GET  /links`       - List links, newest first
/// - `GET  /stats/{id}`  - Visit statistics with optional date range
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route("/stats/{id}", get(stats_handler))
}
