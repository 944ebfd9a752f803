use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Portfolio item (a curated standalone image)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub storage_url: String,
    pub storage_key: String,
    pub category: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioItemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub storage_url: String,
    pub category: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePortfolioItemRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(url(message = "Storage URL must be a valid URL"))]
    pub storage_url: String,
    #[validate(length(min = 1, max = 512, message = "Storage key must be between 1 and 512 characters"))]
    pub storage_key: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePortfolioItemRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl From<PortfolioItem> for PortfolioItemResponse {
    fn from(item: PortfolioItem) -> Self {
        PortfolioItemResponse {
            id: item.id,
            title: item.title,
            description: item.description,
            storage_url: item.storage_url,
            category: item.category,
            sort_order: item.sort_order,
            published: item.published,
            created_at: item.created_at,
        }
    }
}
