//! Category normalization and backfill
//!
//! The classification subsystem: keyword-based category inference, the AI
//! fallback classifier for inconclusive labels, the batch backfill job over
//! unclassified assets, and the read-time category aggregator.

pub mod aggregate;
pub mod backfill;
pub mod keyword;
pub mod provider;
pub mod vision;

pub use aggregate::{aggregate_categories, AssetCategoryRecord, CategoryCount};
pub use backfill::{BackfillJob, BackfillRecordOutcome, BackfillSummary, ClassificationSource};
pub use keyword::classify_label;
pub use provider::{resolve_provider_settings, ProviderDefaults, ProviderSettings};
pub use vision::{ChatCompletionClassifier, VisionClassification, VisionClassifier};
