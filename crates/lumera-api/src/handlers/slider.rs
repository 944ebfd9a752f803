use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{CreateSliderImageRequest, SliderImage, UpdateSliderImageRequest};
use lumera_core::AppError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/v1/slider",
    tag = "slider",
    responses(
        (status = 200, description = "Published slider images in order", body = Vec<SliderImage>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_slider"))]
pub async fn list_slider(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let images = state.db.slider.list(true).await?;
    Ok(Json(images))
}

// ----- Admin handlers -----

#[utoipa::path(
    get,
    path = "/api/v1/admin/slider",
    tag = "admin",
    responses(
        (status = 200, description = "All slider images", body = Vec<SliderImage>)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "admin_list_slider"))]
pub async fn admin_list_slider(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let images = state.db.slider.list(false).await?;
    Ok(Json(images))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/slider",
    tag = "admin",
    request_body = CreateSliderImageRequest,
    responses(
        (status = 201, description = "Slider image created", body = SliderImage),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_slider_image"))]
pub async fn create_slider_image(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateSliderImageRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let image = state.db.slider.create(&request).await?;

    Ok((StatusCode::CREATED, Json(image)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/slider/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Slider image ID")
    ),
    request_body = UpdateSliderImageRequest,
    responses(
        (status = 200, description = "Slider image updated", body = SliderImage),
        (status = 404, description = "Slider image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_slider_image", slider_id = %id))]
pub async fn update_slider_image(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateSliderImageRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let image = state.db.slider.update(id, &request).await?;

    Ok(Json(image))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/slider/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Slider image ID")
    ),
    responses(
        (status = 204, description = "Slider image deleted"),
        (status = 404, description = "Slider image not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_slider_image", slider_id = %id))]
pub async fn delete_slider_image(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.slider.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Slider image not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
