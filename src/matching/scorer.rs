//! Weighted keyword scoring of a single FAQ.
//!
//! For each message token:
//!
//! | Token is…                                   | Score | Counter            |
//! |---------------------------------------------|-------|--------------------|
//! | a literal FAQ keyword                       | +2    | `exact_matches`    |
//! | in the expanded synonym set, not a keyword  | +1    | `synonym_matches`  |
//!
//! Repeated tokens count every time. On top of that, +1 is added once if any
//! token is also a token of the FAQ category.

use ahash::AHashSet;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::tokenizer::space::SpaceTokenizer;
use crate::faq::Faq;
use crate::matching::result::MatchDetails;
use crate::synonym::ExpandedKeywords;

/// Score added for each token that is a literal keyword.
pub const EXACT_MATCH_WEIGHT: u32 = 2;

/// Score added for each token matched only through a synonym group.
pub const SYNONYM_MATCH_WEIGHT: u32 = 1;

/// Score added once when the message touches the FAQ category.
pub const CATEGORY_MATCH_WEIGHT: u32 = 1;

/// Score and breakdown for one FAQ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqScore {
    pub score: u32,
    pub details: MatchDetails,
}

/// Scores message tokens against FAQs.
///
/// The normalizer must be the one used to produce the tokens; it is applied
/// to category strings and keywords so that both sides are compared in the
/// same form.
#[derive(Clone, Debug, Default)]
pub struct Scorer {
    normalizer: Normalizer,
    tokenizer: SpaceTokenizer,
}

impl Scorer {
    /// Create a scorer using the given normalization strategy.
    pub fn new(normalizer: Normalizer) -> Self {
        Scorer {
            normalizer,
            tokenizer: SpaceTokenizer::new(),
        }
    }

    /// Get the normalization strategy.
    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    /// Score the tokens against one FAQ and its expanded keyword set.
    pub fn score(&self, tokens: &[String], faq: &Faq, expanded: &ExpandedKeywords<'_>) -> FaqScore {
        let keywords: AHashSet<&str> = faq.keywords.iter().map(String::as_str).collect();
        let mut result = FaqScore::default();

        for token in tokens {
            if keywords.contains(token.as_str()) {
                result.score += EXACT_MATCH_WEIGHT;
                result.details.exact_matches += 1;
            } else if expanded.contains(token) {
                result.score += SYNONYM_MATCH_WEIGHT;
                result.details.synonym_matches += 1;
            }
        }

        if self.category_matches(tokens, &faq.category) {
            result.score += CATEGORY_MATCH_WEIGHT;
            result.details.category_match = true;
        }

        result
    }

    /// Check if any token is also a token of the normalized category.
    pub fn category_matches(&self, tokens: &[String], category: &str) -> bool {
        let normalized = self.normalizer.normalize(category);
        let category_tokens: AHashSet<&str> = self.tokenizer.split(&normalized).collect();
        tokens.iter().any(|t| category_tokens.contains(t.as_str()))
    }

    /// FAQ keywords whose normalized form is one of the tokens.
    ///
    /// Keyword order and duplicates follow the FAQ. A keyword that normalizes
    /// to several words never appears here, even when each word was scored.
    pub fn matched_keywords(&self, tokens: &[String], faq: &Faq) -> Vec<String> {
        let token_set: AHashSet<&str> = tokens.iter().map(String::as_str).collect();
        faq.keywords
            .iter()
            .filter(|keyword| token_set.contains(self.normalizer.normalize(keyword).as_str()))
            .cloned()
            .collect()
    }
}
