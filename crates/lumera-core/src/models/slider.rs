use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Homepage slider image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct SliderImage {
    pub id: Uuid,
    pub storage_url: String,
    pub storage_key: String,
    pub caption: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateSliderImageRequest {
    #[validate(url(message = "Storage URL must be a valid URL"))]
    pub storage_url: String,
    #[validate(length(min = 1, max = 512, message = "Storage key must be between 1 and 512 characters"))]
    pub storage_key: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Link URL must be a valid URL"))]
    pub link_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateSliderImageRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Link URL must be a valid URL"))]
    pub link_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub published: Option<bool>,
}
