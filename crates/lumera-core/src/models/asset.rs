use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// A single gallery image. Assets live in the media CDN; the record stores the
/// CDN URL and key. The category field is free text and may hold several
/// comma-separated values; NULL or empty means "not yet classified".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct MediaAsset {
    pub id: Uuid,
    pub gallery_id: Uuid,
    pub storage_url: String,
    pub storage_key: String,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub published: bool,
    pub likes: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaAssetResponse {
    pub id: Uuid,
    pub gallery_id: Uuid,
    pub storage_url: String,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub published: bool,
    pub likes: i32,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAssetRequest {
    pub gallery_id: Uuid,
    #[validate(url(message = "Storage URL must be a valid URL"))]
    pub storage_url: String,
    #[validate(length(min = 1, max = 512, message = "Storage key must be between 1 and 512 characters"))]
    pub storage_key: String,
    #[serde(default)]
    #[validate(length(max = 512, message = "Alt text must be at most 512 characters"))]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: Option<i32>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAssetRequest {
    #[serde(default)]
    #[validate(length(max = 512, message = "Alt text must be at most 512 characters"))]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: Option<i32>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl From<MediaAsset> for MediaAssetResponse {
    fn from(asset: MediaAsset) -> Self {
        MediaAssetResponse {
            id: asset.id,
            gallery_id: asset.gallery_id,
            storage_url: asset.storage_url,
            alt_text: asset.alt_text,
            category: asset.category,
            year: asset.year,
            published: asset.published,
            likes: asset.likes,
            sort_order: asset.sort_order,
            created_at: asset.created_at,
        }
    }
}

impl MediaAsset {
    /// The label the keyword classifier works from: alt text when present,
    /// otherwise the storage key (which usually carries the filename).
    pub fn classification_label(&self) -> &str {
        match self.alt_text.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => &self.storage_key,
        }
    }

    /// Whether this asset still needs a category.
    pub fn is_unclassified(&self) -> bool {
        self.category
            .as_deref()
            .map(|c| c.trim().is_empty())
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(alt_text: Option<&str>, category: Option<&str>) -> MediaAsset {
        MediaAsset {
            id: Uuid::new_v4(),
            gallery_id: Uuid::new_v4(),
            storage_url: "https://cdn.example.com/img/eagle.jpg".to_string(),
            storage_key: "img/eagle-closeup.jpg".to_string(),
            alt_text: alt_text.map(String::from),
            category: category.map(String::from),
            year: None,
            published: true,
            likes: 0,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_classification_label_prefers_alt_text() {
        let a = asset(Some("Steller's sea eagle at dawn"), None);
        assert_eq!(a.classification_label(), "Steller's sea eagle at dawn");
    }

    #[test]
    fn test_classification_label_falls_back_to_storage_key() {
        let a = asset(None, None);
        assert_eq!(a.classification_label(), "img/eagle-closeup.jpg");
        let b = asset(Some("   "), None);
        assert_eq!(b.classification_label(), "img/eagle-closeup.jpg");
    }

    #[test]
    fn test_is_unclassified() {
        assert!(asset(None, None).is_unclassified());
        assert!(asset(None, Some("")).is_unclassified());
        assert!(asset(None, Some("  ")).is_unclassified());
        assert!(!asset(None, Some("Birds")).is_unclassified());
    }
}
