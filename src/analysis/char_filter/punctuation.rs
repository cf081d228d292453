//! Punctuation stripping char filter.

use super::CharFilter;

/// Characters replaced by a space.
pub const PUNCTUATION: [char; 14] = [
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Replaces each character of [`PUNCTUATION`] with a single space. Runs of spaces are left for
/// [`WhitespaceCollapseCharFilter`](super::whitespace::WhitespaceCollapseCharFilter).
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationCharFilter
    }

    /// Check if a character is stripped by this filter.
    pub fn is_punctuation(c: char) -> bool {
        PUNCTUATION.contains(&c)
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| if Self::is_punctuation(c) { ' ' } else { c })
            .collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_every_listed_character() {
        let filter = PunctuationCharFilter::new();
        assert_eq!(filter.filter(".,!?;:()[]{}\"'"), " ".repeat(14));
    }

    #[test]
    fn test_apostrophe_splits_suffix() {
        let filter = PunctuationCharFilter::new();
        assert_eq!(filter.filter("istanbul'da"), "istanbul da");
    }

    #[test]
    fn test_keeps_other_symbols() {
        let filter = PunctuationCharFilter::new();
        assert_eq!(filter.filter("e-posta @ 100%"), "e-posta @ 100%");
    }
}
