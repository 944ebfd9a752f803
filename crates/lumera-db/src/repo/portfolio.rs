use lumera_core::{
    models::{CreatePortfolioItemRequest, PortfolioItem, UpdatePortfolioItemRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const PORTFOLIO_COLUMNS: &str = "id, title, description, storage_url, storage_key, category, sort_order, published, created_at";

/// Repository for portfolio items
#[derive(Clone)]
pub struct PortfolioRepository {
    pool: PgPool,
}

impl PortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "portfolio_items", db.operation = "insert"))]
    pub async fn create(
        &self,
        request: &CreatePortfolioItemRequest,
    ) -> Result<PortfolioItem, AppError> {
        let item = sqlx::query_as::<Postgres, PortfolioItem>(&format!(
            r#"
            INSERT INTO portfolio_items (title, description, storage_url, storage_key, category, sort_order, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PORTFOLIO_COLUMNS}
            "#,
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.storage_url)
        .bind(&request.storage_key)
        .bind(&request.category)
        .bind(request.sort_order)
        .bind(request.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    #[tracing::instrument(skip(self), fields(db.table = "portfolio_items", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<PortfolioItem>, AppError> {
        let item = sqlx::query_as::<Postgres, PortfolioItem>(&format!(
            "SELECT {PORTFOLIO_COLUMNS} FROM portfolio_items WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    #[tracing::instrument(skip(self), fields(db.table = "portfolio_items", db.operation = "select"))]
    pub async fn list(&self, published_only: bool) -> Result<Vec<PortfolioItem>, AppError> {
        let items = if published_only {
            sqlx::query_as::<Postgres, PortfolioItem>(&format!(
                "SELECT {PORTFOLIO_COLUMNS} FROM portfolio_items WHERE published = TRUE ORDER BY sort_order ASC, created_at ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<Postgres, PortfolioItem>(&format!(
                "SELECT {PORTFOLIO_COLUMNS} FROM portfolio_items ORDER BY sort_order ASC, created_at ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        };

        Ok(items)
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "portfolio_items", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdatePortfolioItemRequest,
    ) -> Result<PortfolioItem, AppError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Portfolio item not found".to_string()))?;

        let title = request.title.clone().unwrap_or(current.title);
        let description = request.description.clone().or(current.description);
        let category = request.category.clone().or(current.category);
        let sort_order = request.sort_order.unwrap_or(current.sort_order);
        let published = request.published.unwrap_or(current.published);

        let item = sqlx::query_as::<Postgres, PortfolioItem>(&format!(
            r#"
            UPDATE portfolio_items
            SET title = $1, description = $2, category = $3, sort_order = $4, published = $5
            WHERE id = $6
            RETURNING {PORTFOLIO_COLUMNS}
            "#,
        ))
        .bind(&title)
        .bind(&description)
        .bind(&category)
        .bind(sort_order)
        .bind(published)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    #[tracing::instrument(skip(self), fields(db.table = "portfolio_items", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
