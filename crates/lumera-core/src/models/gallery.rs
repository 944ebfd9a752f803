use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

use super::asset::MediaAssetResponse;

/// Gallery model grouping media assets. The gallery-level category/country is
/// the fallback used when an individual asset carries no category of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Gallery {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub cover_url: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Gallery response with an optional asset count
#[derive(Debug, Serialize, ToSchema)]
pub struct GalleryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub cover_url: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub asset_count: Option<i64>,
}

/// Gallery plus its (published) assets, for the public detail endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct GalleryDetailResponse {
    #[serde(flatten)]
    pub gallery: GalleryResponse,
    pub assets: Vec<MediaAssetResponse>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGalleryRequest {
    #[validate(length(min = 1, max = 255, message = "Gallery name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateGalleryRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Gallery name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl From<Gallery> for GalleryResponse {
    fn from(gallery: Gallery) -> Self {
        GalleryResponse {
            id: gallery.id,
            name: gallery.name,
            slug: gallery.slug,
            description: gallery.description,
            category: gallery.category,
            country: gallery.country,
            cover_url: gallery.cover_url,
            sort_order: gallery.sort_order,
            published: gallery.published,
            created_at: gallery.created_at,
            updated_at: gallery.updated_at,
            asset_count: None,
        }
    }
}

impl Gallery {
    /// Create a gallery response carrying an asset count
    pub fn to_response_with_count(self, asset_count: Option<i64>) -> GalleryResponse {
        let mut response = GalleryResponse::from(self);
        response.asset_count = asset_count;
        response
    }
}
