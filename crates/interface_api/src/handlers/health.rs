//! Health check handlers

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::{error::ApiError, AppState};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness check (includes database)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    state
        .service
        .health_check()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(HealthResponse::new("ready")))
}
