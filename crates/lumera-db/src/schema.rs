//! Runtime schema bootstrap and capability probing.
//!
//! Schema evolution is not gated on a migration pipeline: tables are created
//! with `CREATE TABLE IF NOT EXISTS` at startup, and columns added after the
//! initial deployment (`category`, `year` on media assets) are probed via
//! `information_schema` and added with `ALTER TABLE ... ADD COLUMN IF NOT
//! EXISTS`. The probe result is cached for the process lifetime; the asset
//! read path additionally tolerates a missing column at query time.

use std::collections::HashSet;

use lumera_core::AppError;
use sqlx::PgPool;

/// Columns that arrived after the initial assets table shape.
const ASSET_DRIFT_COLUMNS: &[(&str, &str)] = &[
    ("media_assets", "category"),
    ("media_assets", "year"),
];

const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS galleries (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        description TEXT,
        category TEXT,
        country TEXT,
        cover_url TEXT,
        sort_order INT NOT NULL DEFAULT 0,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS media_assets (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        gallery_id UUID NOT NULL REFERENCES galleries(id),
        storage_url TEXT NOT NULL,
        storage_key TEXT NOT NULL,
        alt_text TEXT,
        category TEXT,
        year INT,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        likes INT NOT NULL DEFAULT 0,
        sort_order INT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS slider_images (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        storage_url TEXT NOT NULL,
        storage_key TEXT NOT NULL,
        caption TEXT,
        link_url TEXT,
        sort_order INT NOT NULL DEFAULT 0,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS blog_posts (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        excerpt TEXT,
        body TEXT NOT NULL,
        cover_url TEXT,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        published_at TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS portfolio_items (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title TEXT NOT NULL,
        description TEXT,
        storage_url TEXT NOT NULL,
        storage_key TEXT NOT NULL,
        category TEXT,
        sort_order INT NOT NULL DEFAULT 0,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title TEXT NOT NULL,
        description TEXT,
        cover_url TEXT,
        pdf_url TEXT,
        pdf_storage_key TEXT,
        price_cents INT,
        purchase_url TEXT,
        sort_order INT NOT NULL DEFAULT 0,
        published BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS contact_messages (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        subject TEXT,
        body TEXT NOT NULL,
        read BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS site_settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Cached view of which columns exist, probed once at startup.
#[derive(Debug, Clone)]
pub struct SchemaCapabilities {
    columns: HashSet<(String, String)>,
}

impl SchemaCapabilities {
    /// Probe `information_schema.columns` for the public schema.
    #[tracing::instrument(skip(pool))]
    pub async fn probe(pool: &PgPool) -> Result<Self, AppError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT table_name, column_name FROM information_schema.columns WHERE table_schema = 'public'",
        )
        .fetch_all(pool)
        .await?;

        Ok(Self {
            columns: rows.into_iter().collect(),
        })
    }

    pub fn has_column(&self, table: &str, column: &str) -> bool {
        self.columns
            .contains(&(table.to_string(), column.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            columns: pairs
                .iter()
                .map(|(t, c)| (t.to_string(), c.to_string()))
                .collect(),
        }
    }
}

/// Create all tables that do not exist yet.
#[tracing::instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Database schema ensured");
    Ok(())
}

/// Probe for drifted asset columns and add any that are missing, then
/// return a fresh capability snapshot.
#[tracing::instrument(skip(pool))]
pub async fn ensure_asset_columns(pool: &PgPool) -> Result<SchemaCapabilities, AppError> {
    let caps = SchemaCapabilities::probe(pool).await?;

    let mut added = false;
    for (table, column) in ASSET_DRIFT_COLUMNS {
        if !caps.has_column(table, column) {
            tracing::warn!(table, column, "Column missing, adding at runtime");
            let column_type = if *column == "year" { "INT" } else { "TEXT" };
            let statement = format!(
                "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} {}",
                table, column, column_type
            );
            sqlx::query(&statement).execute(pool).await?;
            added = true;
        }
    }

    if added {
        SchemaCapabilities::probe(pool).await
    } else {
        Ok(caps)
    }
}

/// True if the error is Postgres "undefined column" (SQLSTATE 42703),
/// i.e. the query referenced a column the deployment does not have yet.
pub fn is_undefined_column(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "42703")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_column() {
        let caps = SchemaCapabilities::from_pairs(&[
            ("media_assets", "id"),
            ("media_assets", "category"),
        ]);
        assert!(caps.has_column("media_assets", "category"));
        assert!(!caps.has_column("media_assets", "year"));
        assert!(!caps.has_column("galleries", "category"));
    }

    #[test]
    fn test_is_undefined_column_on_non_database_error() {
        assert!(!is_undefined_column(&sqlx::Error::PoolClosed));
        assert!(!is_undefined_column(&sqlx::Error::RowNotFound));
    }
}
