//! Keyword-based category inference from text labels.

use lumera_core::Category;

/// Ordered keyword table. Entries are checked top to bottom and the FIRST
/// matching entry wins, so earlier categories take priority when a label
/// contains keywords from more than one category ("heron-over-the-sea"
/// resolves to Birds, not Ocean). Keep new keywords grouped under their
/// category and be deliberate about where a group sits in the table.
pub const KEYWORD_TABLE: &[(&str, Category)] = &[
    ("bird", Category::Birds),
    ("eagle", Category::Birds),
    ("owl", Category::Birds),
    ("heron", Category::Birds),
    ("kingfisher", Category::Birds),
    ("animal", Category::Animal),
    ("tiger", Category::Animal),
    ("elephant", Category::Animal),
    ("leopard", Category::Animal),
    ("deer", Category::Animal),
    ("monkey", Category::Animal),
    ("ocean", Category::Ocean),
    ("sea", Category::Ocean),
    ("beach", Category::Ocean),
    ("wave", Category::Ocean),
    ("coral", Category::Ocean),
    ("nature", Category::Nature),
    ("landscape", Category::Nature),
    ("forest", Category::Nature),
    ("mountain", Category::Nature),
    ("sunset", Category::Nature),
    ("meadow", Category::Nature),
    ("river", Category::Nature),
    ("peace", Category::PeaceInMind),
    ("meditation", Category::PeaceInMind),
    ("monk", Category::PeaceInMind),
    ("temple", Category::PeaceInMind),
];

/// Classify a free-text label (filename, alt text) by substring matching
/// against [`KEYWORD_TABLE`]. Returns `Others` when no keyword matches.
pub fn classify_label(label: &str) -> Category {
    let lowered = label.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Others)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match() {
        assert_eq!(classify_label("eagle-closeup.jpg"), Category::Birds);
        assert_eq!(classify_label("sunset-meadow.png"), Category::Nature);
        assert_eq!(classify_label("coral-reef-dive.webp"), Category::Ocean);
        assert_eq!(classify_label("temple-at-dusk.jpg"), Category::PeaceInMind);
        assert_eq!(classify_label("leopard-stalking.jpg"), Category::Animal);
    }

    #[test]
    fn test_no_match_returns_others() {
        assert_eq!(classify_label("random-holiday.png"), Category::Others);
        assert_eq!(classify_label(""), Category::Others);
        assert_eq!(classify_label("studio-portrait-003"), Category::Others);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(classify_label("EAGLE_IMG_0042.JPG"), Category::Birds);
        assert_eq!(classify_label("Ocean Waves"), Category::Ocean);
    }

    #[test]
    fn test_first_declared_entry_wins() {
        // Contains both a Birds keyword and an Ocean keyword; Birds entries
        // are declared first in the table.
        assert_eq!(classify_label("heron-over-the-sea.jpg"), Category::Birds);
        // Contains Ocean ("sea") and Nature ("sunset"); Ocean is declared first.
        assert_eq!(classify_label("sunset-over-the-sea.jpg"), Category::Ocean);
    }

    #[test]
    fn test_substring_containment_not_word_match() {
        // "search" contains "sea"; containment matching is deliberate.
        assert_eq!(classify_label("search-results.png"), Category::Ocean);
    }
}
