//! Slip handlers
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | /slips | 200 `{"message":"OK"}` |
//! | GET | /slips | 200 `[slip, ...]` |
//! | GET | /slips/:id | 200 slip |
//! | PUT | /slips/:id | 200 `{"message":"OK"}` |
//! | DELETE | /slips/:id | 200 `{"message":"OK"}` |
//!
//! Path ids are parsed before the body, so a request with both a bad id and
//! a bad body reports the id.

use axum::{extract::State, Json};
use domain_slip::{Slip, SlipDraft};

use crate::dto::MessageResponse;
use crate::extract::{JsonBody, SlipIdPath};
use crate::{error::ApiError, AppState};

/// Creates a slip from `{"body": ..., "tags": [...]}`
pub async fn create_slip(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<SlipDraft>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.create_slip(draft).await?;
    Ok(Json(MessageResponse::ok()))
}

/// Gets a slip by id
pub async fn get_slip(
    State(state): State<AppState>,
    SlipIdPath(id): SlipIdPath,
) -> Result<Json<Slip>, ApiError> {
    let slip = state.service.get_slip(id).await?;
    Ok(Json(slip))
}

/// Lists all slips
pub async fn get_all_slips(State(state): State<AppState>) -> Result<Json<Vec<Slip>>, ApiError> {
    let slips = state.service.get_all_slips().await?;
    Ok(Json(slips))
}

/// Replaces body and tags of a slip; the id always comes from the path
pub async fn update_slip(
    State(state): State<AppState>,
    SlipIdPath(id): SlipIdPath,
    JsonBody(draft): JsonBody<SlipDraft>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.update_slip(id, draft).await?;
    Ok(Json(MessageResponse::ok()))
}

/// Deletes a slip
pub async fn delete_slip(
    State(state): State<AppState>,
    SlipIdPath(id): SlipIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete_slip(id).await?;
    Ok(Json(MessageResponse::ok()))
}
