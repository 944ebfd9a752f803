//! Application initialization

pub mod database;
pub mod routes;
pub mod server;

use anyhow::Result;
use axum::Router;
use std::sync::Arc;

use crate::services::email::EmailService;
use crate::state::{AppState, DbState};
use lumera_core::Config;

/// Initialize database, schema, services, and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let pool = database::setup_database(&config).await?;

    lumera_db::schema::ensure_schema(&pool).await?;
    let schema = lumera_db::schema::ensure_asset_columns(&pool).await?;

    let email = EmailService::from_config(&config);
    let is_production = config.is_production();

    let state = Arc::new(AppState {
        db: DbState::new(pool),
        config: config.clone(),
        schema,
        email,
        is_production,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
