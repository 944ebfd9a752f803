use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Blog post. `published_at` is stamped the first time a post is published.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing response without the full body
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBlogPostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: String,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Excerpt must be at most 1000 characters"))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: String,
    #[serde(default)]
    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBlogPostRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: Option<String>,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Excerpt must be at most 1000 characters"))]
    pub excerpt: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Cover URL must be a valid URL"))]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        BlogPostResponse {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            cover_url: post.cover_url,
            published: post.published,
            published_at: post.published_at,
            created_at: post.created_at,
        }
    }
}
