use lumera_core::{
    models::{CreateSliderImageRequest, SliderImage, UpdateSliderImageRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const SLIDER_COLUMNS: &str =
    "id, storage_url, storage_key, caption, link_url, sort_order, published, created_at";

/// Repository for homepage slider images
#[derive(Clone)]
pub struct SliderRepository {
    pool: PgPool,
}

impl SliderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "slider_images", db.operation = "insert"))]
    pub async fn create(
        &self,
        request: &CreateSliderImageRequest,
    ) -> Result<SliderImage, AppError> {
        let image = sqlx::query_as::<Postgres, SliderImage>(&format!(
            r#"
            INSERT INTO slider_images (storage_url, storage_key, caption, link_url, sort_order, published)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SLIDER_COLUMNS}
            "#,
        ))
        .bind(&request.storage_url)
        .bind(&request.storage_key)
        .bind(&request.caption)
        .bind(&request.link_url)
        .bind(request.sort_order)
        .bind(request.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    #[tracing::instrument(skip(self), fields(db.table = "slider_images", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<SliderImage>, AppError> {
        let image = sqlx::query_as::<Postgres, SliderImage>(&format!(
            "SELECT {SLIDER_COLUMNS} FROM slider_images WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(image)
    }

    #[tracing::instrument(skip(self), fields(db.table = "slider_images", db.operation = "select"))]
    pub async fn list(&self, published_only: bool) -> Result<Vec<SliderImage>, AppError> {
        let images = if published_only {
            sqlx::query_as::<Postgres, SliderImage>(&format!(
                "SELECT {SLIDER_COLUMNS} FROM slider_images WHERE published = TRUE ORDER BY sort_order ASC, created_at ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<Postgres, SliderImage>(&format!(
                "SELECT {SLIDER_COLUMNS} FROM slider_images ORDER BY sort_order ASC, created_at ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        };

        Ok(images)
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "slider_images", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateSliderImageRequest,
    ) -> Result<SliderImage, AppError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Slider image not found".to_string()))?;

        let caption = request.caption.clone().or(current.caption);
        let link_url = request.link_url.clone().or(current.link_url);
        let sort_order = request.sort_order.unwrap_or(current.sort_order);
        let published = request.published.unwrap_or(current.published);

        let image = sqlx::query_as::<Postgres, SliderImage>(&format!(
            r#"
            UPDATE slider_images
            SET caption = $1, link_url = $2, sort_order = $3, published = $4
            WHERE id = $5
            RETURNING {SLIDER_COLUMNS}
            "#,
        ))
        .bind(&caption)
        .bind(&link_url)
        .bind(sort_order)
        .bind(published)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    #[tracing::instrument(skip(self), fields(db.table = "slider_images", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM slider_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
