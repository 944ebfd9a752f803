//! Database repositories for the data access layer
//!
//! One repository per domain aggregate, each holding a `PgPool` and exposing
//! CRUD operations and specialized queries through parameterized SQL. Schema
//! bootstrap and capability probing live in `schema`.

pub mod classify_traits;
pub mod repo;
pub mod schema;

pub use classify_traits::BackfillAssetStore;
pub use repo::{
    AssetCategoryRow, BlogRepository, BookRepository, ContactRepository, GalleryRepository,
    MediaAssetRepository, PortfolioRepository, SettingsRepository, SliderRepository,
};
pub use schema::SchemaCapabilities;
