//! # faq-matcher
//!
//! Rule-based matching of free-text support messages against an FAQ catalog.
//!
//! ## Features
//!
//! - Locale-aware normalization (Turkish diacritic folding, punctuation stripping)
//! - Stopword filtering
//! - Synonym-group keyword expansion
//! - Weighted scoring with exact, synonym and category matches
//! - Deterministic ranking with a minimum-score threshold
//! - Caller-side fallback to an asynchronous answer generator

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod matching;
pub mod responder;
pub mod stats;
pub mod synonym;
pub mod util;

pub mod prelude {
    pub use crate::config::RulesConfig;
    pub use crate::error::{FaqMatcherError, Result};
    pub use crate::faq::{Faq, FaqCatalog};
    pub use crate::matching::{FaqMatch, MatchDetails, MatchResult, RankedFaq, match_all_faqs, match_message};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
