use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{CreateAssetRequest, MediaAssetResponse, UpdateAssetRequest};
use lumera_core::AppError;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub id: Uuid,
    pub likes: i32,
}

#[utoipa::path(
    post,
    path = "/api/v1/assets/{id}/like",
    tag = "assets",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Like recorded", body = LikeResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "like_asset", asset_id = %id))]
pub async fn like_asset(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let likes = state.db.assets.increment_likes(id).await?;

    Ok(Json(LikeResponse { id, likes }))
}

// ----- Admin handlers -----

#[utoipa::path(
    post,
    path = "/api/v1/admin/assets",
    tag = "admin",
    request_body = CreateAssetRequest,
    responses(
        (status = 201, description = "Asset created", body = MediaAssetResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Gallery not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_asset"))]
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateAssetRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let asset = state.db.assets.create(&request).await?;

    Ok((StatusCode::CREATED, Json(MediaAssetResponse::from(asset))))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/assets/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset found", body = MediaAssetResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_asset", asset_id = %id))]
pub async fn get_asset(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let asset = state
        .db
        .assets
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

    Ok(Json(MediaAssetResponse::from(asset)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/assets/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    request_body = UpdateAssetRequest,
    responses(
        (status = 200, description = "Asset updated", body = MediaAssetResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_asset", asset_id = %id))]
pub async fn update_asset(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateAssetRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let asset = state.db.assets.update(id, &request).await?;

    Ok(Json(MediaAssetResponse::from(asset)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/assets/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_asset", asset_id = %id))]
pub async fn delete_asset(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.assets.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Asset not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
