//! Category backfill over unclassified assets.
//!
//! A sequential scan: keyword classification first, the AI fallback only when
//! the keyword result is `Others`, then a per-record UPDATE. One record's
//! failure is recorded in its outcome and never aborts the batch.
//!
//! Re-running is safe because classified records leave the scan set. There is
//! no guard against two concurrent runs double-processing the same record
//! (lost-update race); runs are expected to be triggered one at a time from
//! the back office.

use std::sync::Arc;

use lumera_core::{AppError, Category};
use lumera_db::BackfillAssetStore;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::keyword::classify_label;
use crate::vision::VisionClassifier;

/// Where a persisted category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    Keyword,
    Ai,
}

/// Outcome for a single asset.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BackfillRecordOutcome {
    pub asset_id: Uuid,
    /// The label the keyword classifier worked from.
    pub label: String,
    pub category: Option<String>,
    pub source: Option<ClassificationSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch summary plus itemized outcomes. Dry runs carry only the count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BackfillSummary {
    pub total: usize,
    pub updated: usize,
    pub dry_run: bool,
    pub results: Vec<BackfillRecordOutcome>,
}

/// The backfill job. The vision classifier is optional: when provider
/// settings cannot be resolved the job still runs keyword-only.
pub struct BackfillJob {
    store: Arc<dyn BackfillAssetStore>,
    vision: Option<Arc<dyn VisionClassifier>>,
}

impl BackfillJob {
    pub fn new(
        store: Arc<dyn BackfillAssetStore>,
        vision: Option<Arc<dyn VisionClassifier>>,
    ) -> Self {
        Self { store, vision }
    }

    /// Run the backfill. With `dry_run` set, only counts affected records.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, dry_run: bool) -> Result<BackfillSummary, AppError> {
        if dry_run {
            let count = self.store.count_unclassified().await?;
            tracing::info!(count, "Backfill dry run");
            return Ok(BackfillSummary {
                total: count as usize,
                updated: 0,
                dry_run: true,
                results: Vec::new(),
            });
        }

        let assets = self.store.list_unclassified().await?;
        let total = assets.len();
        let mut updated = 0;
        let mut results = Vec::with_capacity(total);

        for asset in assets {
            let label = asset.classification_label().to_string();
            let mut category = classify_label(&label);
            let mut source = ClassificationSource::Keyword;
            let mut error = None;

            if category == Category::Others {
                if let Some(ref vision) = self.vision {
                    match vision.classify_image(&asset.storage_url).await {
                        Ok(classification) => {
                            category = classification.category;
                            source = ClassificationSource::Ai;
                        }
                        Err(e) => {
                            // Keep the keyword result; the record still gets
                            // a category so re-runs skip it.
                            tracing::warn!(
                                asset_id = %asset.id,
                                error = %e,
                                "AI fallback failed, keeping keyword result"
                            );
                            error = Some(e.to_string());
                        }
                    }
                }
            }

            match self.store.set_category(asset.id, category.as_str()).await {
                Ok(true) => {
                    updated += 1;
                    results.push(BackfillRecordOutcome {
                        asset_id: asset.id,
                        label,
                        category: Some(category.as_str().to_string()),
                        source: Some(source),
                        error,
                    });
                }
                Ok(false) => {
                    results.push(BackfillRecordOutcome {
                        asset_id: asset.id,
                        label,
                        category: None,
                        source: None,
                        error: Some("Asset no longer exists".to_string()),
                    });
                }
                Err(e) => {
                    tracing::warn!(asset_id = %asset.id, error = %e, "Failed to persist category");
                    results.push(BackfillRecordOutcome {
                        asset_id: asset.id,
                        label,
                        category: None,
                        source: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        tracing::info!(total, updated, "Backfill completed");

        Ok(BackfillSummary {
            total,
            updated,
            dry_run: false,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::VisionClassification;
    use async_trait::async_trait;
    use chrono::Utc;
    use lumera_core::models::MediaAsset;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory asset store for testing without a database
    struct MockAssetStore {
        assets: Mutex<HashMap<Uuid, MediaAsset>>,
        fail_on: Option<Uuid>,
    }

    impl MockAssetStore {
        fn new(assets: Vec<MediaAsset>) -> Self {
            Self {
                assets: Mutex::new(assets.into_iter().map(|a| (a.id, a)).collect()),
                fail_on: None,
            }
        }

        fn failing_on(assets: Vec<MediaAsset>, id: Uuid) -> Self {
            Self {
                fail_on: Some(id),
                ..Self::new(assets)
            }
        }

        fn category_of(&self, id: Uuid) -> Option<String> {
            self.assets.lock().unwrap().get(&id).and_then(|a| a.category.clone())
        }
    }

    #[async_trait]
    impl BackfillAssetStore for MockAssetStore {
        async fn list_unclassified(&self) -> Result<Vec<MediaAsset>, AppError> {
            let mut unclassified: Vec<MediaAsset> = self
                .assets
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.is_unclassified())
                .cloned()
                .collect();
            unclassified.sort_by_key(|a| a.created_at);
            Ok(unclassified)
        }

        async fn count_unclassified(&self) -> Result<i64, AppError> {
            Ok(self
                .assets
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.is_unclassified())
                .count() as i64)
        }

        async fn set_category(&self, id: Uuid, category: &str) -> Result<bool, AppError> {
            if self.fail_on == Some(id) {
                return Err(AppError::Internal("simulated write failure".to_string()));
            }
            let mut assets = self.assets.lock().unwrap();
            match assets.get_mut(&id) {
                Some(asset) => {
                    asset.category = Some(category.to_string());
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    /// Vision classifier with a canned answer or a canned failure
    struct MockVisionClassifier {
        category: Option<Category>,
    }

    #[async_trait]
    impl VisionClassifier for MockVisionClassifier {
        async fn classify_image(&self, _image_url: &str) -> Result<VisionClassification, AppError> {
            match self.category {
                Some(category) => Ok(VisionClassification {
                    category,
                    confidence: 0.9,
                    reasoning: Some("mocked".to_string()),
                }),
                None => Err(AppError::ClassificationUnavailable(
                    "provider unreachable".to_string(),
                )),
            }
        }
    }

    fn asset(key: &str, category: Option<&str>) -> MediaAsset {
        MediaAsset {
            id: Uuid::new_v4(),
            gallery_id: Uuid::new_v4(),
            storage_url: format!("https://cdn.example.com/{key}"),
            storage_key: key.to_string(),
            alt_text: None,
            category: category.map(String::from),
            year: None,
            published: true,
            likes: 0,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_dry_run_counts_without_mutating() {
        let assets = vec![
            asset("eagle-1.jpg", None),
            asset("unknown-1.jpg", None),
            asset("unknown-2.jpg", Some("")),
            asset("done-1.jpg", Some("Nature")),
            asset("done-2.jpg", Some("Ocean")),
        ];
        let ids: Vec<Uuid> = assets.iter().map(|a| a.id).collect();
        let store = Arc::new(MockAssetStore::new(assets));
        let job = BackfillJob::new(store.clone(), None);

        let summary = job.run(true).await.unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.updated, 0);
        assert!(summary.dry_run);
        assert!(summary.results.is_empty());

        // Nothing was written
        assert_eq!(store.category_of(ids[0]), None);
        assert_eq!(store.category_of(ids[3]).as_deref(), Some("Nature"));
    }

    #[tokio::test]
    async fn test_keyword_result_is_persisted() {
        let a = asset("eagle-closeup.jpg", None);
        let id = a.id;
        let store = Arc::new(MockAssetStore::new(vec![a]));
        let job = BackfillJob::new(store.clone(), None);

        let summary = job.run(false).await.unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(store.category_of(id).as_deref(), Some("Birds"));
        assert_eq!(summary.results[0].source, Some(ClassificationSource::Keyword));
    }

    #[tokio::test]
    async fn test_ai_fallback_only_for_others() {
        let matched = asset("sunset-meadow.png", None);
        let unmatched = asset("random-holiday.png", None);
        let (matched_id, unmatched_id) = (matched.id, unmatched.id);
        let store = Arc::new(MockAssetStore::new(vec![matched, unmatched]));
        let vision = Arc::new(MockVisionClassifier {
            category: Some(Category::Ocean),
        });
        let job = BackfillJob::new(store.clone(), Some(vision));

        let summary = job.run(false).await.unwrap();
        assert_eq!(summary.updated, 2);

        // Keyword hit never consults the AI
        assert_eq!(store.category_of(matched_id).as_deref(), Some("Nature"));
        // Keyword miss takes the AI answer
        assert_eq!(store.category_of(unmatched_id).as_deref(), Some("Ocean"));

        let by_id: HashMap<Uuid, &BackfillRecordOutcome> =
            summary.results.iter().map(|r| (r.asset_id, r)).collect();
        assert_eq!(by_id[&matched_id].source, Some(ClassificationSource::Keyword));
        assert_eq!(by_id[&unmatched_id].source, Some(ClassificationSource::Ai));
    }

    #[tokio::test]
    async fn test_ai_failure_keeps_others_and_batch_continues() {
        let a = asset("random-holiday.png", None);
        let b = asset("eagle-2.jpg", None);
        let (a_id, b_id) = (a.id, b.id);
        let store = Arc::new(MockAssetStore::new(vec![a, b]));
        let vision = Arc::new(MockVisionClassifier { category: None });
        let job = BackfillJob::new(store.clone(), Some(vision));

        let summary = job.run(false).await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.updated, 2);

        // The failed AI call degraded to "Others" but still persisted
        assert_eq!(store.category_of(a_id).as_deref(), Some("Others"));
        assert_eq!(store.category_of(b_id).as_deref(), Some("Birds"));

        let failed = summary
            .results
            .iter()
            .find(|r| r.asset_id == a_id)
            .unwrap();
        assert_eq!(failed.source, Some(ClassificationSource::Keyword));
        assert!(failed.error.as_deref().unwrap().contains("unreachable"));
    }

    #[tokio::test]
    async fn test_write_failure_is_recorded_not_fatal() {
        let a = asset("eagle-3.jpg", None);
        let b = asset("tiger-1.jpg", None);
        let (a_id, b_id) = (a.id, b.id);
        let store = Arc::new(MockAssetStore::failing_on(vec![a, b], a_id));
        let job = BackfillJob::new(store.clone(), None);

        let summary = job.run(false).await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.updated, 1);

        let failed = summary
            .results
            .iter()
            .find(|r| r.asset_id == a_id)
            .unwrap();
        assert!(failed.error.is_some());
        assert!(failed.category.is_none());
        assert_eq!(store.category_of(b_id).as_deref(), Some("Animal"));
    }

    #[tokio::test]
    async fn test_second_run_dry_count_is_zero() {
        let assets = vec![
            asset("eagle-4.jpg", None),
            asset("random-5.png", None),
            asset("wave-6.jpg", None),
        ];
        let store = Arc::new(MockAssetStore::new(assets));
        let job = BackfillJob::new(store.clone(), None);

        let first = job.run(false).await.unwrap();
        assert_eq!(first.updated, 3);

        let second = job.run(true).await.unwrap();
        assert_eq!(second.total, 0);
    }
}
