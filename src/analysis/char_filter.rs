//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw message string before it reaches the
//! tokenizer. The folding normalizer chains them in this order:
//!
//! ```text
//! DiacriticFolding → PunctuationStrip → WhitespaceCollapse
//! ```
//!
//! # Available Filters
//!
//! - [`diacritic::DiacriticFoldingCharFilter`] - Lowercases and folds Turkish diacritics
//! - [`punctuation::PunctuationCharFilter`] - Replaces punctuation with spaces
//! - [`whitespace::WhitespaceCollapseCharFilter`] - Collapses and trims whitespace
//!
//! # Examples
//!
//! ```
//! use faq_matcher::analysis::char_filter::CharFilter;
//! use faq_matcher::analysis::char_filter::punctuation::PunctuationCharFilter;
//!
//! let filter = PunctuationCharFilter::new();
//! assert_eq!(filter.filter("kargo?"), "kargo ");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Filters are pure functions of their input. The trait requires
/// `Send + Sync` so that a filter chain can be shared between threads.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod diacritic;
pub mod punctuation;
pub mod whitespace;
