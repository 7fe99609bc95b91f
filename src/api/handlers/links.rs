//! Handlers for link registration and listing.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::links::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed or uses a scheme other
/// than `http`/`https`.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state.link_service.create_link(request.url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all registered links, most recently created first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(LinkListResponse {
        links: links.into_iter().map(LinkResponse::from).collect(),
    }))
}
