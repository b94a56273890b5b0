// src/routes/health.rs
use axum::Json;

use crate::message::HealthStatus;
use crate::notice::VERSION;
use crate::routes::iso_timestamp;

/// Health check endpoint for QA testing. Always succeeds.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: iso_timestamp(),
        version: VERSION.to_string(),
    })
}
