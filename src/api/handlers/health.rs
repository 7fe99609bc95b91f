//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
