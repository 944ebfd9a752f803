use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Photo book in the catalog. The PDF (sample or full) lives in the CDN.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub pdf_url: Option<String>,
    pub pdf_storage_key: Option<String>,
    pub price_cents: Option<i32>,
    pub purchase_url: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub pdf_url: Option<String>,
    pub price_cents: Option<i32>,
    pub purchase_url: Option<String>,
    pub sort_order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    #[validate(url(message = "PDF URL must be a valid URL"))]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub pdf_storage_key: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_cents: Option<i32>,
    #[serde(default)]
    #[validate(url(message = "Purchase URL must be a valid URL"))]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBookRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    #[validate(url(message = "PDF URL must be a valid URL"))]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub pdf_storage_key: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_cents: Option<i32>,
    #[serde(default)]
    #[validate(url(message = "Purchase URL must be a valid URL"))]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        BookResponse {
            id: book.id,
            title: book.title,
            description: book.description,
            cover_url: book.cover_url,
            pdf_url: book.pdf_url,
            price_cents: book.price_cents,
            purchase_url: book.purchase_url,
            sort_order: book.sort_order,
            published: book.published,
            created_at: book.created_at,
        }
    }
}
