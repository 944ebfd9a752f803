use lumera_core::{
    models::{ContactMessage, ContactRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const CONTACT_COLUMNS: &str = "id, name, email, subject, body, read, created_at";

/// Repository for contact form messages
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, request), fields(db.table = "contact_messages", db.operation = "insert"))]
    pub async fn create(&self, request: &ContactRequest) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<Postgres, ContactMessage>(&format!(
            r#"
            INSERT INTO contact_messages (name, email, subject, body)
            VALUES ($1, $2, $3, $4)
            RETURNING {CONTACT_COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.subject)
        .bind(&request.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// List messages, newest first
    #[tracing::instrument(skip(self), fields(db.table = "contact_messages", db.operation = "select"))]
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<Postgres, ContactMessage>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    #[tracing::instrument(skip(self), fields(db.table = "contact_messages", db.operation = "update", db.record_id = %id))]
    pub async fn mark_read(&self, id: Uuid) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("UPDATE contact_messages SET read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
