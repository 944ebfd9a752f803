use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{
    BlogPost, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest,
};
use lumera_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

#[utoipa::path(
    get,
    path = "/api/v1/blog",
    tag = "blog",
    params(
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Published posts, newest first", body = Vec<BlogPostResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, pagination), fields(operation = "list_posts"))]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Enforce maximum limit to prevent abuse
    let limit = pagination.limit.clamp(1, 100);
    let offset = pagination.offset.max(0);

    let posts = state.db.blog.list(true, limit, offset).await?;

    Ok(Json(
        posts
            .into_iter()
            .map(BlogPostResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/{slug}",
    tag = "blog",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post found", body = BlogPost),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_post"))]
pub async fn get_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let post = state
        .db
        .blog
        .get_by_slug(&slug)
        .await?
        .filter(|p| p.published)
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    Ok(Json(post))
}

// ----- Admin handlers -----

#[utoipa::path(
    get,
    path = "/api/v1/admin/blog",
    tag = "admin",
    params(
        PaginationQuery
    ),
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<BlogPostResponse>)
    )
)]
#[tracing::instrument(skip(state, pagination), fields(operation = "admin_list_posts"))]
pub async fn admin_list_posts(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let limit = pagination.limit.clamp(1, 100);
    let offset = pagination.offset.max(0);

    let posts = state.db.blog.list(false, limit, offset).await?;

    Ok(Json(
        posts
            .into_iter()
            .map(BlogPostResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/blog",
    tag = "admin",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Slug already in use", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_post"))]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateBlogPostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let post = state.db.blog.create(&request).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/blog/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Post updated", body = BlogPost),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_post", post_id = %id))]
pub async fn update_post(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateBlogPostRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let post = state.db.blog.update(id, &request).await?;

    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/blog/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_post", post_id = %id))]
pub async fn delete_post(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.blog.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Blog post not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
