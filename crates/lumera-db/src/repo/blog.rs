use lumera_core::{
    models::{BlogPost, CreateBlogPostRequest, UpdateBlogPostRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, body, cover_url, published, published_at, created_at, updated_at";

/// Repository for blog posts
#[derive(Clone)]
pub struct BlogRepository {
    pool: PgPool,
}

impl BlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post. `published_at` is stamped when created already published.
    #[tracing::instrument(skip(self, request), fields(db.table = "blog_posts", db.operation = "insert"))]
    pub async fn create(&self, request: &CreateBlogPostRequest) -> Result<BlogPost, AppError> {
        let duplicate_exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1)",
        )
        .bind(&request.slug)
        .fetch_one(&self.pool)
        .await?;

        if duplicate_exists {
            return Err(AppError::Conflict(format!(
                "A post with slug '{}' already exists",
                request.slug
            )));
        }

        let post = sqlx::query_as::<Postgres, BlogPost>(&format!(
            r#"
            INSERT INTO blog_posts (title, slug, excerpt, body, cover_url, published, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, CASE WHEN $6 THEN NOW() ELSE NULL END)
            RETURNING {BLOG_COLUMNS}
            "#,
        ))
        .bind(&request.title)
        .bind(&request.slug)
        .bind(&request.excerpt)
        .bind(&request.body)
        .bind(&request.cover_url)
        .bind(request.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    #[tracing::instrument(skip(self), fields(db.table = "blog_posts", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<Postgres, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    #[tracing::instrument(skip(self), fields(db.table = "blog_posts", db.operation = "select"))]
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<Postgres, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE slug = $1",
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// List posts, newest published first
    #[tracing::instrument(skip(self), fields(db.table = "blog_posts", db.operation = "select"))]
    pub async fn list(
        &self,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, AppError> {
        let posts = if published_only {
            sqlx::query_as::<Postgres, BlogPost>(&format!(
                "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE published = TRUE ORDER BY published_at DESC NULLS LAST LIMIT $1 OFFSET $2",
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<Postgres, BlogPost>(&format!(
                "SELECT {BLOG_COLUMNS} FROM blog_posts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(posts)
    }

    /// Update a post. Publishing for the first time stamps `published_at`.
    #[tracing::instrument(skip(self, request), fields(db.table = "blog_posts", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        if let Some(ref new_slug) = request.slug {
            let duplicate_exists = sqlx::query_scalar::<Postgres, bool>(
                "SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1 AND id != $2)",
            )
            .bind(new_slug)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

            if duplicate_exists {
                return Err(AppError::Conflict(format!(
                    "A post with slug '{}' already exists",
                    new_slug
                )));
            }
        }

        let title = request.title.clone().unwrap_or(current.title);
        let slug = request.slug.clone().unwrap_or(current.slug);
        let excerpt = request.excerpt.clone().or(current.excerpt);
        let body = request.body.clone().unwrap_or(current.body);
        let cover_url = request.cover_url.clone().or(current.cover_url);
        let published = request.published.unwrap_or(current.published);
        let published_at = match (published, current.published_at) {
            (true, None) => Some(chrono::Utc::now()),
            (_, existing) => existing,
        };

        let post = sqlx::query_as::<Postgres, BlogPost>(&format!(
            r#"
            UPDATE blog_posts
            SET title = $1, slug = $2, excerpt = $3, body = $4, cover_url = $5,
                published = $6, published_at = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING {BLOG_COLUMNS}
            "#,
        ))
        .bind(&title)
        .bind(&slug)
        .bind(&excerpt)
        .bind(&body)
        .bind(&cover_url)
        .bind(published)
        .bind(published_at)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    #[tracing::instrument(skip(self), fields(db.table = "blog_posts", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
