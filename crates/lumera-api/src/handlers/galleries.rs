use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{
    CreateGalleryRequest, GalleryDetailResponse, GalleryResponse, MediaAssetResponse,
    UpdateGalleryRequest,
};
use lumera_core::AppError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/v1/galleries",
    tag = "galleries",
    responses(
        (status = 200, description = "Published galleries", body = Vec<GalleryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_galleries"))]
pub async fn list_galleries(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let galleries = state.db.galleries.list(true).await?;

    let mut responses = Vec::with_capacity(galleries.len());
    for gallery in galleries {
        let count = state.db.assets.count_in_gallery(gallery.id).await?;
        responses.push(gallery.to_response_with_count(Some(count)));
    }

    Ok(Json(responses))
}

#[utoipa::path(
    get,
    path = "/api/v1/galleries/{slug}",
    tag = "galleries",
    params(
        ("slug" = String, Path, description = "Gallery slug")
    ),
    responses(
        (status = 200, description = "Gallery with its published assets", body = GalleryDetailResponse),
        (status = 404, description = "Gallery not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_gallery"))]
pub async fn get_gallery(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let gallery = state
        .db
        .galleries
        .get_by_slug(&slug)
        .await?
        .filter(|g| g.published)
        .ok_or_else(|| AppError::NotFound("Gallery not found".to_string()))?;

    let assets = state.db.assets.list_by_gallery(gallery.id, true).await?;
    let asset_count = assets.len() as i64;

    Ok(Json(GalleryDetailResponse {
        gallery: gallery.to_response_with_count(Some(asset_count)),
        assets: assets.into_iter().map(MediaAssetResponse::from).collect(),
    }))
}

// ----- Admin handlers -----

#[utoipa::path(
    get,
    path = "/api/v1/admin/galleries",
    tag = "admin",
    responses(
        (status = 200, description = "All galleries", body = Vec<GalleryResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "admin_list_galleries"))]
pub async fn admin_list_galleries(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let galleries = state.db.galleries.list(false).await?;

    let mut responses = Vec::with_capacity(galleries.len());
    for gallery in galleries {
        let count = state.db.assets.count_in_gallery(gallery.id).await?;
        responses.push(gallery.to_response_with_count(Some(count)));
    }

    Ok(Json(responses))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/galleries",
    tag = "admin",
    request_body = CreateGalleryRequest,
    responses(
        (status = 201, description = "Gallery created", body = GalleryResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_gallery"))]
pub async fn create_gallery(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateGalleryRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let gallery = state.db.galleries.create(&request).await?;

    Ok((StatusCode::CREATED, Json(GalleryResponse::from(gallery))))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/galleries/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Gallery ID")
    ),
    request_body = UpdateGalleryRequest,
    responses(
        (status = 200, description = "Gallery updated", body = GalleryResponse),
        (status = 404, description = "Gallery not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_gallery", gallery_id = %id))]
pub async fn update_gallery(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateGalleryRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let gallery = state.db.galleries.update(id, &request).await?;

    Ok(Json(GalleryResponse::from(gallery)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/galleries/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Gallery ID")
    ),
    responses(
        (status = 204, description = "Gallery deleted"),
        (status = 404, description = "Gallery not found", body = ErrorResponse),
        (status = 409, description = "Gallery still contains assets", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_gallery", gallery_id = %id))]
pub async fn delete_gallery(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.galleries.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Gallery not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/galleries/{id}/assets",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Gallery ID")
    ),
    responses(
        (status = 200, description = "All assets in the gallery", body = Vec<MediaAssetResponse>),
        (status = 404, description = "Gallery not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "admin_list_assets", gallery_id = %id))]
pub async fn admin_list_gallery_assets(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    state
        .db
        .galleries
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery not found".to_string()))?;

    let assets = state.db.assets.list_by_gallery(id, false).await?;

    Ok(Json(
        assets
            .into_iter()
            .map(MediaAssetResponse::from)
            .collect::<Vec<_>>(),
    ))
}
