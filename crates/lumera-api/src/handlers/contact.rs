use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lumera_core::models::{ContactMessageResponse, ContactRequest};
use lumera_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message received", body = ContactMessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "submit_contact"))]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(AppError::from)?;

    let message = state.db.contact.create(&request).await?;

    // Notification failure must not fail the submission
    if let Some(ref email) = state.email {
        if let Err(e) = email.send_contact_notification(&message).await {
            tracing::warn!(message_id = %message.id, error = %e, "Contact notification email failed");
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(ContactMessageResponse::from(message)),
    ))
}

// ----- Admin handlers -----

#[derive(Deserialize, ToSchema, utoipa::IntoParams)]
pub struct MessagesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/messages",
    tag = "admin",
    params(
        MessagesQuery
    ),
    responses(
        (status = 200, description = "Contact messages, newest first", body = Vec<ContactMessageResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, query), fields(operation = "list_messages"))]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let limit = query.limit.clamp(1, 200);
    let offset = query.offset.max(0);

    let messages = state.db.contact.list(limit, offset).await?;

    Ok(Json(
        messages
            .into_iter()
            .map(ContactMessageResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/messages/{id}/read",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Message marked as read"),
        (status = 404, description = "Message not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "mark_message_read", message_id = %id))]
pub async fn mark_message_read(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let updated = state.db.contact.mark_read(id).await?;
    if !updated {
        return Err(AppError::NotFound("Message not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
