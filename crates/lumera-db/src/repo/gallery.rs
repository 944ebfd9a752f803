use lumera_core::{
    models::{CreateGalleryRequest, Gallery, UpdateGalleryRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const GALLERY_COLUMNS: &str = "id, name, slug, description, category, country, cover_url, sort_order, published, created_at, updated_at";

/// Repository for managing galleries
#[derive(Clone)]
pub struct GalleryRepository {
    pool: PgPool,
}

impl GalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new gallery
    #[tracing::instrument(skip(self, request), fields(db.table = "galleries", db.operation = "insert"))]
    pub async fn create(&self, request: &CreateGalleryRequest) -> Result<Gallery, AppError> {
        let duplicate_exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM galleries WHERE slug = $1)",
        )
        .bind(&request.slug)
        .fetch_one(&self.pool)
        .await?;

        if duplicate_exists {
            return Err(AppError::Conflict(format!(
                "A gallery with slug '{}' already exists",
                request.slug
            )));
        }

        let gallery = sqlx::query_as::<Postgres, Gallery>(&format!(
            r#"
            INSERT INTO galleries (name, slug, description, category, country, cover_url, sort_order, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {GALLERY_COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.slug)
        .bind(&request.description)
        .bind(&request.category)
        .bind(&request.country)
        .bind(&request.cover_url)
        .bind(request.sort_order)
        .bind(request.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(gallery)
    }

    /// Get gallery by ID
    #[tracing::instrument(skip(self), fields(db.table = "galleries", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Gallery>, AppError> {
        let gallery = sqlx::query_as::<Postgres, Gallery>(&format!(
            "SELECT {GALLERY_COLUMNS} FROM galleries WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(gallery)
    }

    /// Get gallery by slug
    #[tracing::instrument(skip(self), fields(db.table = "galleries", db.operation = "select"))]
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Gallery>, AppError> {
        let gallery = sqlx::query_as::<Postgres, Gallery>(&format!(
            "SELECT {GALLERY_COLUMNS} FROM galleries WHERE slug = $1",
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(gallery)
    }

    /// List galleries, ordered by sort order then name
    #[tracing::instrument(skip(self), fields(db.table = "galleries", db.operation = "select"))]
    pub async fn list(&self, published_only: bool) -> Result<Vec<Gallery>, AppError> {
        let galleries = if published_only {
            sqlx::query_as::<Postgres, Gallery>(&format!(
                "SELECT {GALLERY_COLUMNS} FROM galleries WHERE published = TRUE ORDER BY sort_order ASC, name ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<Postgres, Gallery>(&format!(
                "SELECT {GALLERY_COLUMNS} FROM galleries ORDER BY sort_order ASC, name ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        };

        Ok(galleries)
    }

    /// Update gallery fields. Only provided fields change.
    #[tracing::instrument(skip(self, request), fields(db.table = "galleries", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateGalleryRequest,
    ) -> Result<Gallery, AppError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gallery not found".to_string()))?;

        if let Some(ref new_slug) = request.slug {
            let duplicate_exists = sqlx::query_scalar::<Postgres, bool>(
                "SELECT EXISTS(SELECT 1 FROM galleries WHERE slug = $1 AND id != $2)",
            )
            .bind(new_slug)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

            if duplicate_exists {
                return Err(AppError::Conflict(format!(
                    "A gallery with slug '{}' already exists",
                    new_slug
                )));
            }
        }

        let name = request.name.clone().unwrap_or(current.name);
        let slug = request.slug.clone().unwrap_or(current.slug);
        let description = request.description.clone().or(current.description);
        let category = request.category.clone().or(current.category);
        let country = request.country.clone().or(current.country);
        let cover_url = request.cover_url.clone().or(current.cover_url);
        let sort_order = request.sort_order.unwrap_or(current.sort_order);
        let published = request.published.unwrap_or(current.published);

        let gallery = sqlx::query_as::<Postgres, Gallery>(&format!(
            r#"
            UPDATE galleries
            SET name = $1, slug = $2, description = $3, category = $4, country = $5,
                cover_url = $6, sort_order = $7, published = $8, updated_at = NOW()
            WHERE id = $9
            RETURNING {GALLERY_COLUMNS}
            "#,
        ))
        .bind(&name)
        .bind(&slug)
        .bind(&description)
        .bind(&category)
        .bind(&country)
        .bind(&cover_url)
        .bind(sort_order)
        .bind(published)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(gallery)
    }

    /// Delete gallery (must be empty)
    #[tracing::instrument(skip(self), fields(db.table = "galleries", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let asset_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM media_assets WHERE gallery_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        if asset_count > 0 {
            return Err(AppError::Conflict(
                "Cannot delete gallery: it still contains assets".to_string(),
            ));
        }

        let rows_affected = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
