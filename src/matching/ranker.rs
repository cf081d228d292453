//! Ranking of a whole FAQ catalog against one message.
//!
//! Every FAQ is scored, then entries are sorted by score, highest first. The
//! sort is stable, so FAQs with equal scores keep their catalog order and
//! repeated calls with the same inputs return the same sequence.

use tracing::{debug, trace};

use crate::analysis::analyzer::MessageAnalyzer;
use crate::config::RulesConfig;
use crate::faq::Faq;
use crate::matching::result::{FaqMatch, RankedFaq};
use crate::matching::scorer::Scorer;
use crate::synonym::SynonymExpander;

/// Scores and orders FAQs for a rules configuration.
///
/// A ranker holds no per-message state; one instance can serve any number of
/// calls, including from several threads.
#[derive(Clone, Debug)]
pub struct Ranker<'c> {
    config: &'c RulesConfig,
    analyzer: MessageAnalyzer,
    scorer: Scorer,
}

impl<'c> Ranker<'c> {
    /// Create a ranker for the given configuration.
    pub fn new(config: &'c RulesConfig) -> Self {
        Ranker {
            config,
            analyzer: MessageAnalyzer::from_config(config),
            scorer: Scorer::new(config.normalizer()),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RulesConfig {
        self.config
    }

    /// Get the analyzer used for messages.
    pub fn analyzer(&self) -> &MessageAnalyzer {
        &self.analyzer
    }

    /// Score every FAQ against a message and sort by score, highest first.
    pub fn rank<'a>(&self, text: &str, faqs: &'a [Faq]) -> Vec<RankedFaq<'a>> {
        let tokens = self.analyzer.terms(text);
        debug!(tokens = tokens.len(), faqs = faqs.len(), "ranking message");
        self.rank_tokens(&tokens, faqs)
    }

    /// Score every FAQ against already-analyzed tokens.
    pub fn rank_tokens<'a>(&self, tokens: &[String], faqs: &'a [Faq]) -> Vec<RankedFaq<'a>> {
        let mut expander = SynonymExpander::new(&self.config.synonym_groups);

        let mut ranked: Vec<RankedFaq<'a>> = faqs
            .iter()
            .map(|faq| {
                let expanded = expander.expand(&faq.keywords);
                let scored = self.scorer.score(tokens, faq, expanded);
                trace!(
                    faq_id = %faq.id,
                    score = scored.score,
                    exact = scored.details.exact_matches,
                    synonym = scored.details.synonym_matches,
                    category = scored.details.category_match,
                    "scored FAQ"
                );

                RankedFaq {
                    result: FaqMatch {
                        faq_id: faq.id.clone(),
                        score: scored.score,
                        matched_keywords: self.scorer.matched_keywords(tokens, faq),
                        match_details: scored.details,
                    },
                    faq,
                }
            })
            .collect();

        // Stable: equal scores keep catalog order.
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked
    }

    /// The top-ranked entry, if its score reaches `minScore`.
    ///
    /// A message with no tokens left after analysis never matches, even with
    /// a zero threshold.
    pub fn best_ranked<'a>(&self, text: &str, faqs: &'a [Faq]) -> Option<RankedFaq<'a>> {
        let tokens = self.analyzer.terms(text);
        if tokens.is_empty() {
            debug!("message has no tokens after analysis");
            return None;
        }

        let best = self.rank_tokens(&tokens, faqs).into_iter().next()?;

        if best.score() >= self.config.min_score {
            debug!(faq_id = %best.result.faq_id, score = best.score(), "matched FAQ");
            Some(best)
        } else {
            debug!(
                best_score = best.score(),
                min_score = self.config.min_score,
                "no FAQ reached the minimum score"
            );
            None
        }
    }

    /// The top-ranked FAQ's match, if its score reaches `minScore`.
    pub fn best_match(&self, text: &str, faqs: &[Faq]) -> Option<FaqMatch> {
        self.best_ranked(text, faqs).map(|best| best.result)
    }
}
