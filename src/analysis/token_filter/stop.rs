//! Stop filter implementation.
//!
//! Removes tokens that appear in the configured stopword set. Matching is an
//! exact, case-sensitive comparison against the already-normalized token
//! text; the stopword list is expected to be normalized by whoever writes the
//! rules configuration.
//!
//! # Examples
//!
//! ```
//! use faq_matcher::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["bir", "ve"]);
//! let result: Vec<&str> = filter.filter(["bir", "iade", "talebi"].into_iter()).collect();
//!
//! assert_eq!(result, vec!["iade", "talebi"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

/// A filter that removes stopwords from a token sequence.
///
/// The set is shared, so cloning a filter or building one from a rules
/// configuration does not copy the words. An empty set lets every token
/// through.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of stopwords to remove
    pub(crate) stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter over a (possibly shared) stopword set.
    pub fn with_stop_words<S: Into<Arc<HashSet<String>>>>(stop_words: S) -> Self {
        StopFilter {
            stop_words: stop_words.into(),
        }
    }

    /// Create a new stop filter from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words.into_iter().map(Into::into).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a token is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Drop stopwords from a token sequence, keeping order and duplicates.
    pub fn filter<'a, I>(&'a self, tokens: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: Iterator<Item = &'a str> + 'a,
    {
        tokens.filter(move |token| !self.is_stop_word(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["bir", "ve", "ne"]);
        let tokens = ["siparis", "ve", "kargo", "ne", "zaman"];

        let result: Vec<&str> = filter.filter(tokens.into_iter()).collect();

        assert_eq!(result, vec!["siparis", "kargo", "zaman"]);
    }

    #[test]
    fn test_stop_filter_is_case_sensitive() {
        let filter = StopFilter::from_words(vec!["ve"]);
        assert!(filter.is_stop_word("ve"));
        assert!(!filter.is_stop_word("VE"));
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let filter = StopFilter::default();
        let result: Vec<&str> = filter.filter(["iade", "iade"].into_iter()).collect();

        assert_eq!(result, vec!["iade", "iade"]);
    }

    #[test]
    fn test_shared_set_is_not_copied() {
        let words: Arc<HashSet<String>> = Arc::new(["ve".to_string()].into_iter().collect());
        let filter = StopFilter::with_stop_words(Arc::clone(&words));

        assert!(Arc::ptr_eq(&filter.stop_words, &words));
    }
}
