//! Fixed category taxonomy used by AI-assisted classification.
//!
//! Manually entered categories elsewhere in the system stay free text; this
//! enumeration only constrains the classifier outputs. The taxonomy is not
//! enforced at write time, so stored category fields may still contain
//! casing variants or plurals outside this set.

use serde::{Deserialize, Serialize};

/// One of the fixed subject-matter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Birds,
    Animal,
    Ocean,
    Nature,
    PeaceInMind,
    Others,
}

impl Category {
    /// All categories, in the order they are presented to the classifier.
    pub const ALL: [Category; 6] = [
        Category::Birds,
        Category::Animal,
        Category::Ocean,
        Category::Nature,
        Category::PeaceInMind,
        Category::Others,
    ];

    /// The canonical display name, as stored in the category column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Birds => "Birds",
            Category::Animal => "Animal",
            Category::Ocean => "Ocean",
            Category::Nature => "Nature",
            Category::PeaceInMind => "Peace in Mind",
            Category::Others => "Others",
        }
    }

    /// Map a free-text label back onto the taxonomy, case-insensitively.
    /// Labels outside the enumeration map to `Others`.
    pub fn from_label(label: &str) -> Category {
        let normalized = label.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == normalized)
            .unwrap_or(Category::Others)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact() {
        assert_eq!(Category::from_label("Birds"), Category::Birds);
        assert_eq!(Category::from_label("Peace in Mind"), Category::PeaceInMind);
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(Category::from_label("ocean"), Category::Ocean);
        assert_eq!(Category::from_label("PEACE IN MIND"), Category::PeaceInMind);
        assert_eq!(Category::from_label("  nature "), Category::Nature);
    }

    #[test]
    fn test_from_label_unknown_maps_to_others() {
        assert_eq!(Category::from_label("Architecture"), Category::Others);
        assert_eq!(Category::from_label(""), Category::Others);
        // Plural/singular variants outside the set are not folded
        assert_eq!(Category::from_label("Bird"), Category::Others);
    }

    #[test]
    fn test_display_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(&c.to_string()), c);
        }
    }
}
