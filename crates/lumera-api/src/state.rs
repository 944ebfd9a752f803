//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what
//! they need via Axum's `FromRef`.

use lumera_core::Config;
use lumera_db::{
    BlogRepository, BookRepository, ContactRepository, GalleryRepository, MediaAssetRepository,
    PortfolioRepository, SchemaCapabilities, SettingsRepository, SliderRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::services::email::EmailService;

// ----- Sub-state types -----

/// Database pool and all repositories.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub galleries: GalleryRepository,
    pub assets: MediaAssetRepository,
    pub slider: SliderRepository,
    pub blog: BlogRepository,
    pub portfolio: PortfolioRepository,
    pub books: BookRepository,
    pub contact: ContactRepository,
    pub settings: SettingsRepository,
}

impl DbState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            galleries: GalleryRepository::new(pool.clone()),
            assets: MediaAssetRepository::new(pool.clone()),
            slider: SliderRepository::new(pool.clone()),
            blog: BlogRepository::new(pool.clone()),
            portfolio: PortfolioRepository::new(pool.clone()),
            books: BookRepository::new(pool.clone()),
            contact: ContactRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool.clone()),
            pool,
        }
    }
}

// ----- AppState -----

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub config: Config,
    /// Column capabilities probed once at startup
    pub schema: SchemaCapabilities,
    pub email: Option<EmailService>,
    pub is_production: bool,
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
