//! Message-to-FAQ matching.
//!
//! ```text
//! text → MessageAnalyzer → tokens
//!                            ↓
//!      for each FAQ: SynonymExpander → Scorer → FaqMatch
//!                            ↓
//!                  Ranker (stable sort, minScore)
//! ```
//!
//! Matching is synchronous and pure: it reads the message, the catalog and
//! the configuration, and allocates its own working sets per call.
//!
//! # Examples
//!
//! ```
//! use faq_matcher::config::RulesConfig;
//! use faq_matcher::faq::Faq;
//! use faq_matcher::matching::{match_all_faqs, match_message};
//!
//! let faqs = vec![
//!     Faq::new("shipping", "Kargom nerede?", "Takip numaranızla sorgulayın.")
//!         .with_keywords(vec!["kargo", "takip"]),
//!     Faq::new("refund", "İade nasıl yapılır?", "İade formunu doldurun.")
//!         .with_keywords(vec!["iade"]),
//! ];
//! let config = RulesConfig::default()
//!     .with_min_score(2)
//!     .with_synonym_group("kargo", vec!["gonderi"]);
//!
//! let best = match_message("Kargo takip numaram yok", &faqs, &config).unwrap();
//! assert_eq!(best.faq_id, "shipping");
//! assert_eq!(best.score, 4);
//!
//! assert!(match_message("Merhaba", &faqs, &config).is_none());
//! assert_eq!(match_all_faqs("gönderi", &faqs, &config)[0].score(), 1);
//! ```

pub mod ranker;
pub mod result;
pub mod scorer;

pub use ranker::Ranker;
pub use result::{FaqMatch, MatchDetails, MatchResult, RankedFaq};
pub use scorer::{FaqScore, Scorer};

use crate::config::RulesConfig;
use crate::faq::Faq;

/// Find the best FAQ for a message.
///
/// Returns `None` when the catalog is empty or the top score is below
/// `config.min_score`.
pub fn match_message(text: &str, faqs: &[Faq], config: &RulesConfig) -> Option<FaqMatch> {
    Ranker::new(config).best_match(text, faqs)
}

/// Score every FAQ against a message, highest score first, ignoring
/// `config.min_score`. Equal scores keep catalog order.
pub fn match_all_faqs<'a>(text: &str, faqs: &'a [Faq], config: &RulesConfig) -> Vec<RankedFaq<'a>> {
    Ranker::new(config).rank(text, faqs)
}
