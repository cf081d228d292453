//! Text normalization strategy.
//!
//! The `normalize` flag of the rules configuration selects one
//! [`Normalizer`] per matching call. The same value normalizes the incoming
//! message, each FAQ category and each FAQ keyword (for highlighting), so all
//! call sites agree on what a token looks like.
//!
//! # Examples
//!
//! ```
//! use faq_matcher::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::from_flag(true);
//! assert_eq!(
//!     normalizer.normalize("İSTANBUL'DA Çalışıyorum!"),
//!     "istanbul da calisiyorum"
//! );
//!
//! let normalizer = Normalizer::from_flag(false);
//! assert_eq!(normalizer.normalize("Kargo?"), "kargo?");
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::diacritic::DiacriticFoldingCharFilter;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::char_filter::whitespace::WhitespaceCollapseCharFilter;

/// How raw text is turned into the form tokens are compared in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalizer {
    /// Unicode lowercasing only. Punctuation and whitespace are untouched.
    Lowercase,
    /// Lowercasing, diacritic folding, punctuation stripping and whitespace
    /// collapsing.
    Folding,
}

impl Normalizer {
    /// Select the strategy for the `normalize` configuration flag.
    pub fn from_flag(normalize: bool) -> Self {
        if normalize {
            Normalizer::Folding
        } else {
            Normalizer::Lowercase
        }
    }

    /// Normalize a piece of text.
    pub fn normalize(&self, text: &str) -> String {
        match self {
            Normalizer::Lowercase => text.to_lowercase(),
            Normalizer::Folding => {
                let folded = DiacriticFoldingCharFilter::new().filter(text);
                let stripped = PunctuationCharFilter::new().filter(&folded);
                WhitespaceCollapseCharFilter::new().filter(&stripped)
            }
        }
    }

    /// Get the name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Normalizer::Lowercase => "lowercase",
            Normalizer::Folding => "folding",
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::Folding
    }
}
