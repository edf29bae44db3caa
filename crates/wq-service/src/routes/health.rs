//! Health check endpoint.

use axum::Json;
use wq_protocol::HealthStatus;

/// GET /api/v1/water/health — liveness check.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
