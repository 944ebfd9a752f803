use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use lumera_core::models::{is_secret_key, UpdateSettingsRequest};
use lumera_core::AppError;
use std::collections::HashMap;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/v1/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Public site settings (secret keys omitted)", body = HashMap<String, String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "public_settings"))]
pub async fn public_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut settings = state.db.settings.all().await?;
    settings.retain(|key, _| !is_secret_key(key));

    Ok(Json(settings))
}

// ----- Admin handlers -----

#[utoipa::path(
    get,
    path = "/api/v1/admin/settings",
    tag = "admin",
    responses(
        (status = 200, description = "All site settings", body = HashMap<String, String>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "admin_settings"))]
pub async fn admin_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let settings = state.db.settings.all().await?;

    Ok(Json(settings))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/settings",
    tag = "admin",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = HashMap<String, String>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "update_settings"))]
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.settings.is_empty() {
        return Err(AppError::InvalidInput("At least one setting is required".to_string()).into());
    }

    state.db.settings.set_many(&request.settings).await?;
    let settings = state.db.settings.all().await?;

    Ok(Json(settings))
}
