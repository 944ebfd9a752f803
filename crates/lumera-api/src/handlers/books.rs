use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{BookResponse, CreateBookRequest, UpdateBookRequest};
use lumera_core::AppError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    responses(
        (status = 200, description = "Published books in catalog order", body = Vec<BookResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_books"))]
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let books = state.db.books.list(true).await?;

    Ok(Json(
        books
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>(),
    ))
}

// ----- Admin handlers -----

#[utoipa::path(
    get,
    path = "/api/v1/admin/books",
    tag = "admin",
    responses(
        (status = 200, description = "All books", body = Vec<BookResponse>)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "admin_list_books"))]
pub async fn admin_list_books(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let books = state.db.books.list(false).await?;

    Ok(Json(
        books
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/books",
    tag = "admin",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_book"))]
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateBookRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let book = state.db.books.create(&request).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/books/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_book", book_id = %id))]
pub async fn update_book(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateBookRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let book = state.db.books.update(id, &request).await?;

    Ok(Json(BookResponse::from(book)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/books/{id}",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_book", book_id = %id))]
pub async fn delete_book(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let deleted = state.db.books.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Book not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
