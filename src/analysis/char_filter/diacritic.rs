//! Diacritic folding char filter.
//!
//! Lowercases text and folds the six Turkish letters with diacritics
//! (`ç ğ ı ö ş ü`, both cases) to their plain Latin base letters.
//!
//! The table is consulted before lowercasing, so the dotted capital `İ` maps
//! straight to `i` instead of `i` plus a combining dot above.

use super::CharFilter;

/// Static folding table: (character with diacritic, plain replacement).
pub const DIACRITIC_FOLDING: [(char, char); 12] = [
    ('ç', 'c'),
    ('ğ', 'g'),
    ('ı', 'i'),
    ('ö', 'o'),
    ('ş', 's'),
    ('ü', 'u'),
    ('Ç', 'c'),
    ('Ğ', 'g'),
    ('İ', 'i'),
    ('Ö', 'o'),
    ('Ş', 's'),
    ('Ü', 'u'),
];

/// Look up the folded form of a single character.
pub fn fold_char(c: char) -> Option<char> {
    DIACRITIC_FOLDING
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Lowercases the input and replaces every character of
/// [`DIACRITIC_FOLDING`] with its plain equivalent.
#[derive(Clone, Debug, Default)]
pub struct DiacriticFoldingCharFilter;

impl DiacriticFoldingCharFilter {
    /// Create a new diacritic folding filter.
    pub fn new() -> Self {
        DiacriticFoldingCharFilter
    }
}

impl CharFilter for DiacriticFoldingCharFilter {
    fn filter(&self, input: &str) -> String {
        let folded: String = input.chars().map(|c| fold_char(c).unwrap_or(c)).collect();
        folded.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "diacritic_folding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_lowercase_letters() {
        let filter = DiacriticFoldingCharFilter::new();
        assert_eq!(filter.filter("çğıöşü"), "cgiosu");
    }

    #[test]
    fn test_folds_uppercase_letters() {
        let filter = DiacriticFoldingCharFilter::new();
        assert_eq!(filter.filter("ÇĞİÖŞÜ"), "cgiosu");
    }

    #[test]
    fn test_dotted_capital_i_leaves_no_combining_mark() {
        let filter = DiacriticFoldingCharFilter::new();
        let output = filter.filter("İADE");
        assert_eq!(output, "iade");
        assert!(!output.contains('\u{0307}'));
    }

    #[test]
    fn test_other_characters_are_lowercased() {
        let filter = DiacriticFoldingCharFilter::new();
        assert_eq!(filter.filter("Kargo Ücreti!"), "kargo ucreti!");
    }

    #[test]
    fn test_lowercasing_is_context_aware() {
        let filter = DiacriticFoldingCharFilter::new();
        assert_eq!(filter.filter("ΟΔΟΣ"), "οδος");
        assert_eq!(filter.filter("ΟΔΟΣ"), "ΟΔΟΣ".to_lowercase());
    }

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('ş'), Some('s'));
        assert_eq!(fold_char('a'), None);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(DiacriticFoldingCharFilter::new().name(), "diacritic_folding");
    }
}
