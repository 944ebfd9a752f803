//! Read-time category aggregation for filter UIs.
//!
//! Computes the distinct set of category values with occurrence counts across
//! assets. A comma-separated category field contributes one count to each
//! constituent category; assets without a category fall back to their
//! gallery's category. Tokens are title-cased so casing variants fold
//! together ("birds" and "Birds" count as one); plural variants do not fold.

use serde::Serialize;
use utoipa::ToSchema;

/// Category inputs for one asset: its own field plus the gallery fallback.
#[derive(Debug, Clone)]
pub struct AssetCategoryRecord {
    pub category: Option<String>,
    pub gallery_category: Option<String>,
}

/// One aggregated category with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCount {
    pub value: String,
    pub count: u64,
}

/// Title-case a single token: first letter of each word upper, rest lower.
fn title_case(token: &str) -> String {
    token
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a category field on commas into normalized tokens, dropping blanks.
fn tokens(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(title_case)
        .collect()
}

/// Aggregate distinct category values with counts.
///
/// Output is sorted by descending count; ties keep first-seen insertion
/// order (stable, not lexicographic).
pub fn aggregate_categories(records: &[AssetCategoryRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        let own: Vec<String> = record.category.as_deref().map(tokens).unwrap_or_default();
        let effective = if own.is_empty() {
            record
                .gallery_category
                .as_deref()
                .map(tokens)
                .unwrap_or_default()
        } else {
            own
        };

        for token in effective {
            match counts.iter_mut().find(|c| c.value == token) {
                Some(entry) => entry.count += 1,
                None => counts.push(CategoryCount {
                    value: token,
                    count: 1,
                }),
            }
        }
    }

    // Stable sort keeps insertion order within equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Option<&str>, gallery_category: Option<&str>) -> AssetCategoryRecord {
        AssetCategoryRecord {
            category: category.map(String::from),
            gallery_category: gallery_category.map(String::from),
        }
    }

    #[test]
    fn test_comma_separated_field_counts_each_token() {
        let counts = aggregate_categories(&[record(Some("Nature, Ocean"), None)]);
        assert_eq!(counts.len(), 2);
        assert!(counts.iter().any(|c| c.value == "Nature" && c.count == 1));
        assert!(counts.iter().any(|c| c.value == "Ocean" && c.count == 1));
        assert!(!counts.iter().any(|c| c.value.contains(',')));
    }

    #[test]
    fn test_casing_variants_fold_together() {
        let counts = aggregate_categories(&[
            record(Some("birds"), None),
            record(Some("Birds"), None),
            record(Some("BIRDS"), None),
        ]);
        assert_eq!(counts, vec![CategoryCount { value: "Birds".to_string(), count: 3 }]);
    }

    #[test]
    fn test_plural_variants_do_not_fold() {
        let counts = aggregate_categories(&[
            record(Some("Bird"), None),
            record(Some("Birds"), None),
        ]);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_gallery_fallback_applies_only_without_own_category() {
        let counts = aggregate_categories(&[
            record(None, Some("Nature")),
            record(Some(""), Some("Nature")),
            record(Some("Ocean"), Some("Nature")),
        ]);
        assert!(counts.iter().any(|c| c.value == "Nature" && c.count == 2));
        assert!(counts.iter().any(|c| c.value == "Ocean" && c.count == 1));
    }

    #[test]
    fn test_sorted_by_descending_count_with_stable_ties() {
        let counts = aggregate_categories(&[
            record(Some("Ocean"), None),
            record(Some("Nature"), None),
            record(Some("Nature"), None),
            record(Some("Birds"), None),
        ]);
        assert_eq!(counts[0].value, "Nature");
        // Ocean was seen before Birds; the tie keeps that order
        assert_eq!(counts[1].value, "Ocean");
        assert_eq!(counts[2].value, "Birds");
    }

    #[test]
    fn test_whitespace_and_empty_tokens_are_dropped() {
        let counts = aggregate_categories(&[record(Some(" Nature ,, , Ocean "), None)]);
        assert_eq!(counts.len(), 2);
        assert!(counts.iter().any(|c| c.value == "Nature"));
        assert!(counts.iter().any(|c| c.value == "Ocean"));
    }

    #[test]
    fn test_multi_word_title_case() {
        let counts = aggregate_categories(&[record(Some("peace in mind"), None)]);
        assert_eq!(counts[0].value, "Peace In Mind");
    }

    #[test]
    fn test_no_categories_anywhere_yields_empty() {
        let counts = aggregate_categories(&[record(None, None), record(Some("  "), None)]);
        assert!(counts.is_empty());
    }
}
