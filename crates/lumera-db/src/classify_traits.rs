//! Traits exposed to the classification subsystem.
//!
//! The backfill job talks to storage through this trait so it can be tested
//! against an in-memory implementation without a database.

use async_trait::async_trait;
use lumera_core::{models::MediaAsset, AppError};
use uuid::Uuid;

use crate::repo::MediaAssetRepository;

/// Asset access needed by the category backfill job.
#[async_trait]
pub trait BackfillAssetStore: Send + Sync {
    /// Assets whose category is NULL or blank, oldest first.
    async fn list_unclassified(&self) -> Result<Vec<MediaAsset>, AppError>;

    /// Count of assets the next run would touch.
    async fn count_unclassified(&self) -> Result<i64, AppError>;

    /// Persist a classification. Returns false if the asset vanished.
    async fn set_category(&self, id: Uuid, category: &str) -> Result<bool, AppError>;
}

#[async_trait]
impl BackfillAssetStore for MediaAssetRepository {
    async fn list_unclassified(&self) -> Result<Vec<MediaAsset>, AppError> {
        MediaAssetRepository::list_unclassified(self).await
    }

    async fn count_unclassified(&self) -> Result<i64, AppError> {
        MediaAssetRepository::count_unclassified(self).await
    }

    async fn set_category(&self, id: Uuid, category: &str) -> Result<bool, AppError> {
        MediaAssetRepository::set_category(self, id, category).await
    }
}
