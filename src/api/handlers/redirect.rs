//! Handler for short URL redirect.

use axum::{
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::state::AppState;

/// Default page served when an identifier doesn't resolve.
///
/// The redirect path falls through instead of returning a hard 404 so that
/// stray or mistyped short URLs land somewhere friendly.
const LANDING_PAGE: &str = "<!doctype html>\n<html>\n<head><title>linktrack</title></head>\n<body><h1>linktrack</h1><p>This short link does not exist.</p></body>\n</html>\n";

/// Redirects a short identifier to its original URL, recording the visit.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Resolve the identifier to a link
/// 2. Record the visit (timestamp, user agent, device classification) and
///    increment the link's visit counter
/// 3. Return 307 Temporary Redirect to the original URL
///
/// An unknown identifier serves the landing page instead of an error
/// response; storage failures still surface as 500.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match state.visit_service.resolve_and_record(&id, user_agent).await {
        Ok(original_url) => Ok(Redirect::temporary(&original_url).into_response()),
        Err(e) if e.is_not_found() => Ok(Html(LANDING_PAGE).into_response()),
        Err(e) => Err(e),
    }
}
