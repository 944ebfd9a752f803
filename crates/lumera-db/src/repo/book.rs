use lumera_core::{
    models::{Book, CreateBookRequest, UpdateBookRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const BOOK_COLUMNS: &str = "id, title, description, cover_url, pdf_url, pdf_storage_key, price_cents, purchase_url, sort_order, published, created_at";

/// Repository for the books catalog
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "books", db.operation = "insert"))]
    pub async fn create(&self, request: &CreateBookRequest) -> Result<Book, AppError> {
        let book = sqlx::query_as::<Postgres, Book>(&format!(
            r#"
            INSERT INTO books (title, description, cover_url, pdf_url, pdf_storage_key, price_cents, purchase_url, sort_order, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {BOOK_COLUMNS}
            "#,
        ))
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.cover_url)
        .bind(&request.pdf_url)
        .bind(&request.pdf_storage_key)
        .bind(request.price_cents)
        .bind(&request.purchase_url)
        .bind(request.sort_order)
        .bind(request.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    #[tracing::instrument(skip(self), fields(db.table = "books", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<Postgres, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    #[tracing::instrument(skip(self), fields(db.table = "books", db.operation = "select"))]
    pub async fn list(&self, published_only: bool) -> Result<Vec<Book>, AppError> {
        let books = if published_only {
            sqlx::query_as::<Postgres, Book>(&format!(
                "SELECT {BOOK_COLUMNS} FROM books WHERE published = TRUE ORDER BY sort_order ASC, created_at ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<Postgres, Book>(&format!(
                "SELECT {BOOK_COLUMNS} FROM books ORDER BY sort_order ASC, created_at ASC",
            ))
            .fetch_all(&self.pool)
            .await?
        };

        Ok(books)
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "books", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: Uuid, request: &UpdateBookRequest) -> Result<Book, AppError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        let title = request.title.clone().unwrap_or(current.title);
        let description = request.description.clone().or(current.description);
        let cover_url = request.cover_url.clone().or(current.cover_url);
        let pdf_url = request.pdf_url.clone().or(current.pdf_url);
        let pdf_storage_key = request.pdf_storage_key.clone().or(current.pdf_storage_key);
        let price_cents = request.price_cents.or(current.price_cents);
        let purchase_url = request.purchase_url.clone().or(current.purchase_url);
        let sort_order = request.sort_order.unwrap_or(current.sort_order);
        let published = request.published.unwrap_or(current.published);

        let book = sqlx::query_as::<Postgres, Book>(&format!(
            r#"
            UPDATE books
            SET title = $1, description = $2, cover_url = $3, pdf_url = $4, pdf_storage_key = $5,
                price_cents = $6, purchase_url = $7, sort_order = $8, published = $9
            WHERE id = $10
            RETURNING {BOOK_COLUMNS}
            "#,
        ))
        .bind(&title)
        .bind(&description)
        .bind(&cover_url)
        .bind(&pdf_url)
        .bind(&pdf_storage_key)
        .bind(price_cents)
        .bind(&purchase_url)
        .bind(sort_order)
        .bind(published)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    #[tracing::instrument(skip(self), fields(db.table = "books", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
