use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use lumera_classify::{
    resolve_provider_settings, BackfillJob, BackfillSummary, ChatCompletionClassifier,
    ProviderDefaults, VisionClassifier,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct BackfillQuery {
    /// Count affected records without mutating anything
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DryRunResponse {
    pub count: usize,
    pub dry_run: bool,
}

/// Resolve provider settings from the settings store with environment
/// defaults and build the AI fallback classifier. Returns `None` when no
/// provider is configured; the backfill then runs keyword-only.
async fn build_vision_classifier(
    state: &AppState,
) -> Result<Option<Arc<dyn VisionClassifier>>, HttpAppError> {
    let persisted = state.db.settings.all().await?;
    let defaults = ProviderDefaults {
        provider: state.config.ai_provider.clone(),
        api_key: state.config.ai_api_key.clone(),
        model: state.config.ai_model.clone(),
        endpoint: state.config.ai_endpoint.clone(),
    };

    match resolve_provider_settings(&persisted, &defaults) {
        Ok(settings) => {
            let classifier = ChatCompletionClassifier::new(
                settings,
                Duration::from_secs(state.config.classify_timeout_seconds),
            )
            .map_err(HttpAppError::from)?;
            Ok(Some(Arc::new(classifier)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "AI provider not configured, backfill will run keyword-only");
            Ok(None)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/backfill-categories",
    tag = "admin",
    params(
        BackfillQuery
    ),
    responses(
        (status = 200, description = "Backfill summary (count-only for dry runs)", body = BackfillSummary),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "backfill_categories", dry_run = query.dry_run))]
pub async fn backfill_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BackfillQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let vision = if query.dry_run {
        None
    } else {
        build_vision_classifier(&state).await?
    };

    let job = BackfillJob::new(Arc::new(state.db.assets.clone()), vision);
    let summary = job.run(query.dry_run).await?;

    if summary.dry_run {
        return Ok(Json(DryRunResponse {
            count: summary.total,
            dry_run: true,
        })
        .into_response());
    }

    Ok(Json(summary).into_response())
}
