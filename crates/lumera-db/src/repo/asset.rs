use lumera_core::{
    models::{CreateAssetRequest, MediaAsset, UpdateAssetRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::schema::is_undefined_column;

const ASSET_COLUMNS: &str = "id, gallery_id, storage_url, storage_key, alt_text, category, year, published, likes, sort_order, created_at";

/// Column list for deployments that predate the category/year columns;
/// the missing fields surface as NULL so the model shape stays stable.
const ASSET_COLUMNS_NO_DRIFT: &str = "id, gallery_id, storage_url, storage_key, alt_text, NULL::text AS category, NULL::int4 AS year, published, likes, sort_order, created_at";

/// Category source row for the aggregation endpoint: the asset's own
/// category plus the owning gallery's category as fallback.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AssetCategoryRow {
    pub category: Option<String>,
    pub gallery_category: Option<String>,
}

/// Repository for gallery media assets
#[derive(Clone)]
pub struct MediaAssetRepository {
    pool: PgPool,
}

impl MediaAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new asset record
    #[tracing::instrument(skip(self, request), fields(db.table = "media_assets", db.operation = "insert"))]
    pub async fn create(&self, request: &CreateAssetRequest) -> Result<MediaAsset, AppError> {
        let gallery_exists = sqlx::query_scalar::<Postgres, bool>(
            "SELECT EXISTS(SELECT 1 FROM galleries WHERE id = $1)",
        )
        .bind(request.gallery_id)
        .fetch_one(&self.pool)
        .await?;

        if !gallery_exists {
            return Err(AppError::NotFound("Gallery not found".to_string()));
        }

        let asset = sqlx::query_as::<Postgres, MediaAsset>(&format!(
            r#"
            INSERT INTO media_assets (gallery_id, storage_url, storage_key, alt_text, category, year, published, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ASSET_COLUMNS}
            "#,
        ))
        .bind(request.gallery_id)
        .bind(&request.storage_url)
        .bind(&request.storage_key)
        .bind(&request.alt_text)
        .bind(&request.category)
        .bind(request.year)
        .bind(request.published)
        .bind(request.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(asset)
    }

    /// Get asset by ID
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<MediaAsset>, AppError> {
        let asset = sqlx::query_as::<Postgres, MediaAsset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM media_assets WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    /// List assets in a gallery, ordered by sort order then creation time.
    /// Falls back to a column-free query when the category/year columns are
    /// missing on an old deployment (schema drift).
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "select"))]
    pub async fn list_by_gallery(
        &self,
        gallery_id: Uuid,
        published_only: bool,
    ) -> Result<Vec<MediaAsset>, AppError> {
        let published_clause = if published_only {
            " AND published = TRUE"
        } else {
            ""
        };

        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM media_assets WHERE gallery_id = $1{published_clause} ORDER BY sort_order ASC, created_at ASC",
        );

        match sqlx::query_as::<Postgres, MediaAsset>(&query)
            .bind(gallery_id)
            .fetch_all(&self.pool)
            .await
        {
            Ok(assets) => Ok(assets),
            Err(err) if is_undefined_column(&err) => {
                tracing::warn!(
                    gallery_id = %gallery_id,
                    "Asset query hit missing column, retrying without drifted columns"
                );
                let fallback = format!(
                    "SELECT {ASSET_COLUMNS_NO_DRIFT} FROM media_assets WHERE gallery_id = $1{published_clause} ORDER BY sort_order ASC, created_at ASC",
                );
                let assets = sqlx::query_as::<Postgres, MediaAsset>(&fallback)
                    .bind(gallery_id)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(assets)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// List assets with no category yet (NULL or blank), oldest first
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "select"))]
    pub async fn list_unclassified(&self) -> Result<Vec<MediaAsset>, AppError> {
        let assets = sqlx::query_as::<Postgres, MediaAsset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM media_assets WHERE category IS NULL OR btrim(category) = '' ORDER BY created_at ASC",
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    /// Count assets with no category yet
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "select"))]
    pub async fn count_unclassified(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM media_assets WHERE category IS NULL OR btrim(category) = ''",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Persist a classification result
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "update", db.record_id = %id))]
    pub async fn set_category(&self, id: Uuid, category: &str) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("UPDATE media_assets SET category = $1 WHERE id = $2")
            .bind(category)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Update asset fields from an admin edit
    #[tracing::instrument(skip(self, request), fields(db.table = "media_assets", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateAssetRequest,
    ) -> Result<MediaAsset, AppError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        let alt_text = request.alt_text.clone().or(current.alt_text);
        let category = request.category.clone().or(current.category);
        let year = request.year.or(current.year);
        let published = request.published.unwrap_or(current.published);
        let sort_order = request.sort_order.unwrap_or(current.sort_order);

        let asset = sqlx::query_as::<Postgres, MediaAsset>(&format!(
            r#"
            UPDATE media_assets
            SET alt_text = $1, category = $2, year = $3, published = $4, sort_order = $5
            WHERE id = $6
            RETURNING {ASSET_COLUMNS}
            "#,
        ))
        .bind(&alt_text)
        .bind(&category)
        .bind(year)
        .bind(published)
        .bind(sort_order)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(asset)
    }

    /// Delete an asset
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Increment the like counter and return the new count
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "update", db.record_id = %id))]
    pub async fn increment_likes(&self, id: Uuid) -> Result<i32, AppError> {
        let likes: Option<i32> = sqlx::query_scalar(
            "UPDATE media_assets SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        likes.ok_or_else(|| AppError::NotFound("Asset not found".to_string()))
    }

    /// Fetch category source pairs (asset category + owning gallery category)
    /// for the aggregation endpoint. Tolerates the missing category column on
    /// drifted deployments by treating every asset category as NULL.
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "select"))]
    pub async fn list_category_sources(
        &self,
        published_only: bool,
    ) -> Result<Vec<AssetCategoryRow>, AppError> {
        let published_clause = if published_only {
            " WHERE a.published = TRUE AND g.published = TRUE"
        } else {
            ""
        };

        let query = format!(
            r#"
            SELECT a.category AS category, g.category AS gallery_category
            FROM media_assets a
            JOIN galleries g ON g.id = a.gallery_id{published_clause}
            "#,
        );

        match sqlx::query_as::<Postgres, AssetCategoryRow>(&query)
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => Ok(rows),
            Err(err) if is_undefined_column(&err) => {
                tracing::warn!("Category source query hit missing column, using gallery categories only");
                let fallback = format!(
                    r#"
                    SELECT NULL::text AS category, g.category AS gallery_category
                    FROM media_assets a
                    JOIN galleries g ON g.id = a.gallery_id{published_clause}
                    "#,
                );
                let rows = sqlx::query_as::<Postgres, AssetCategoryRow>(&fallback)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(rows)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Count assets in a gallery
    #[tracing::instrument(skip(self), fields(db.table = "media_assets", db.operation = "select"))]
    pub async fn count_in_gallery(&self, gallery_id: Uuid) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM media_assets WHERE gallery_id = $1")
                .bind(gallery_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
