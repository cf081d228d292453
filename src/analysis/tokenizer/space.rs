//! Single-space tokenizer implementation.

/// A tokenizer that splits text on single ASCII space characters.
///
/// Consecutive spaces produce empty pieces, which are discarded. Tabs and
/// other whitespace are not separators: with folding normalization they have
/// already been collapsed to spaces, and with lowercase-only normalization
/// they stay inside the token.
///
/// # Examples
///
/// ```
/// use faq_matcher::analysis::tokenizer::space::SpaceTokenizer;
///
/// let tokenizer = SpaceTokenizer::new();
/// let tokens: Vec<&str> = tokenizer.split("kargo  takip").collect();
/// assert_eq!(tokens, vec!["kargo", "takip"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }

    /// Split text into tokens, borrowing from the input.
    pub fn split<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(' ').filter(|piece| !piece.is_empty())
    }
}
