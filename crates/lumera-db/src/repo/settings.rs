use std::collections::HashMap;

use lumera_core::{models::SiteSetting, AppError};
use sqlx::{PgPool, Postgres};

/// Repository for key/value site settings
#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single setting value
    #[tracing::instrument(skip(self), fields(db.table = "site_settings", db.operation = "select"))]
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM site_settings WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Fetch all settings as a map
    #[tracing::instrument(skip(self), fields(db.table = "site_settings", db.operation = "select"))]
    pub async fn all(&self) -> Result<HashMap<String, String>, AppError> {
        let rows = sqlx::query_as::<Postgres, SiteSetting>(
            "SELECT key, value, updated_at FROM site_settings ORDER BY key ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }

    /// Upsert a single setting
    #[tracing::instrument(skip(self, value), fields(db.table = "site_settings", db.operation = "upsert"))]
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Upsert several settings. Values are written one by one; a failure
    /// leaves earlier writes in place (no cross-key transaction, matching
    /// the rest of the write paths).
    #[tracing::instrument(skip(self, settings), fields(db.table = "site_settings", db.operation = "upsert", count = settings.len()))]
    pub async fn set_many(&self, settings: &HashMap<String, String>) -> Result<(), AppError> {
        for (key, value) in settings {
            self.set(key, value).await?;
        }
        Ok(())
    }
}
