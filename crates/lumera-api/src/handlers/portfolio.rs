use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{
    CreatePortfolioItemRequest, PortfolioItemResponse, UpdatePortfolioItemRequest,
};
use lumera_core::AppError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/v1/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Published portfolio items in order", body = Vec<PortfolioItemResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_portfolio"))]
pub async fn list_portfolio(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let items = state.db.portfolio.list(true).await?;

    Ok(Json(
        items
            .into_iter()
            .map(PortfolioItemResponse::from)
            .collect::<Vec<_>>(),
    ))
}

// ----- Admin handlers -----

#[utoipa::path(
    get,
    path = "/api/v1/admin/portfolio",
    tag = "admin",
    responses(
        (status = 200, description = "All portfolio items", body = Vec<PortfolioItemResponse>)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "admin_list_portfolio"))]
pub async fn admin_list_portfolio(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let items = state.db.portfolio.list(false).await?;

    Ok(Json(
        items
            .into_iter()
            .map(PortfolioItemResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/portfolio",
    tag = "admin",
    request_body = CreatePortfolioItemRequest,
    responses(
        (status = 201, description = "Portfolio item created", body = PortfolioItemResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_portfolio_item"))]
pub async fn create_portfolio_item(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreatePortfolioItemRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let item = state.db.portfolio.create(&request).await?;

    Ok((StatusCode::CREATED, Json(PortfolioItemResponse::from(item))))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/portfolio/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Portfolio item ID")
    ),
    request_body = UpdatePortfolioItemRequest,
    responses(
        (status = 200, description = "Portfolio item updated", body = PortfolioItemResponse),
        (status = 404, description = "Portfolio item not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_portfolio_item", item_id = %id))]
pub async fn update_portfolio_item(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdatePortfolioItemRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let item = state.db.portfolio.update(id, &request).await?;

    Ok(Json(PortfolioItemResponse::from(item)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/portfolio/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Portfolio item ID")
    ),
    responses(
        (status = 204, description = "Portfolio item deleted"),
        (status = 404, description = "Portfolio item not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_portfolio_item", item_id = %id))]
pub async fn delete_portfolio_item(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.portfolio.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Portfolio item not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
