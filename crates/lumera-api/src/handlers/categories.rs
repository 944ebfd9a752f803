use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use lumera_classify::{aggregate_categories, AssetCategoryRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct CategoriesQuery {
    /// Restrict to published assets in published galleries (default true)
    #[serde(default = "default_published_only")]
    pub published_only: bool,
}

fn default_published_only() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryEntry {
    pub value: String,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesDebug {
    pub asset_count: usize,
    pub distinct_categories: usize,
    pub published_only: bool,
    /// False on deployments still missing the per-asset category column
    pub category_column: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryEntry>,
    pub debug: CategoriesDebug,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "categories",
    params(
        CategoriesQuery
    ),
    responses(
        (status = 200, description = "Distinct categories with counts", body = CategoriesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_categories"))]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoriesQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let rows = state
        .db
        .assets
        .list_category_sources(query.published_only)
        .await?;

    let asset_count = rows.len();
    let records: Vec<AssetCategoryRecord> = rows
        .into_iter()
        .map(|row| AssetCategoryRecord {
            category: row.category,
            gallery_category: row.gallery_category,
        })
        .collect();

    let counts = aggregate_categories(&records);
    let distinct_categories = counts.len();

    let categories = counts
        .into_iter()
        .map(|c| CategoryEntry {
            label: c.value.clone(),
            value: c.value,
            count: c.count,
        })
        .collect();

    Ok(Json(CategoriesResponse {
        categories,
        debug: CategoriesDebug {
            asset_count,
            distinct_categories,
            published_only: query.published_only,
            category_column: state.schema.has_column("media_assets", "category"),
        },
    }))
}
