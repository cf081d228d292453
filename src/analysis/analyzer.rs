//! Analyzer that turns a raw message into filtered tokens.
//!
//! ```text
//! Raw Text → Normalizer → SpaceTokenizer → StopFilter → Tokens
//! ```
//!
//! # Examples
//!
//! ```
//! use faq_matcher::analysis::analyzer::MessageAnalyzer;
//! use faq_matcher::analysis::normalizer::Normalizer;
//! use faq_matcher::analysis::token_filter::stop::StopFilter;
//!
//! let analyzer = MessageAnalyzer::new(
//!     Normalizer::Folding,
//!     StopFilter::from_words(vec!["ne", "zaman"]),
//! );
//!
//! assert_eq!(analyzer.terms("Kargom ne zaman gelir?"), vec!["kargom", "gelir"]);
//! ```

use std::sync::Arc;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::space::SpaceTokenizer;
use crate::config::RulesConfig;

/// The analyzer used for incoming messages.
#[derive(Clone, Debug, Default)]
pub struct MessageAnalyzer {
    normalizer: Normalizer,
    tokenizer: SpaceTokenizer,
    stop_filter: StopFilter,
}

impl MessageAnalyzer {
    /// Create a new message analyzer.
    pub fn new(normalizer: Normalizer, stop_filter: StopFilter) -> Self {
        MessageAnalyzer {
            normalizer,
            tokenizer: SpaceTokenizer::new(),
            stop_filter,
        }
    }

    /// Build the analyzer described by a rules configuration.
    ///
    /// The stopword set is shared with the configuration.
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(
            config.normalizer(),
            StopFilter::with_stop_words(Arc::clone(&config.stopwords)),
        )
    }

    /// Get the normalization strategy.
    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    /// Normalize text without tokenizing it.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Analyze a message into the ordered list of token texts.
    ///
    /// Order follows the source text and duplicates are kept.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        self.stop_filter
            .filter(self.tokenizer.split(&normalized))
            .map(str::to_string)
            .collect()
    }
}
