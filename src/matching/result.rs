//! Match result types.
//!
//! Inside the crate a best-match query yields `Option<FaqMatch>`. The
//! serialized [`MatchResult`] keeps the wire shape consumers expect, where
//! "no match" is `faqId: null` with a zero score and empty details. That
//! shape is only ever produced from `None`.

use serde::{Deserialize, Serialize};

use crate::faq::Faq;

/// How a score was assembled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Tokens that are literal FAQ keywords
    pub exact_matches: u32,
    /// Tokens reachable only through synonym expansion
    pub synonym_matches: u32,
    /// Whether any token appears in the FAQ category
    pub category_match: bool,
}

/// A scored FAQ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqMatch {
    pub faq_id: String,
    pub score: u32,
    /// FAQ keywords whose normalized form occurs among the message tokens,
    /// for highlighting
    pub matched_keywords: Vec<String>,
    pub match_details: MatchDetails,
}

/// One entry of the all-candidates ranking: the FAQ with its score.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedFaq<'a> {
    #[serde(flatten)]
    pub result: FaqMatch,
    pub faq: &'a Faq,
}

impl RankedFaq<'_> {
    /// The score of this entry.
    pub fn score(&self) -> u32 {
        self.result.score
    }
}

/// Serialized form of a best-match query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub faq_id: Option<String>,
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub match_details: MatchDetails,
}

impl MatchResult {
    /// The "no FAQ cleared the threshold" result.
    pub fn no_match() -> Self {
        Self::default()
    }

    /// Check if this result names an FAQ.
    pub fn is_match(&self) -> bool {
        self.faq_id.is_some()
    }
}

impl From<FaqMatch> for MatchResult {
    fn from(m: FaqMatch) -> Self {
        MatchResult {
            faq_id: Some(m.faq_id),
            score: m.score,
            matched_keywords: m.matched_keywords,
            match_details: m.match_details,
        }
    }
}

impl From<Option<FaqMatch>> for MatchResult {
    fn from(m: Option<FaqMatch>) -> Self {
        m.map(MatchResult::from).unwrap_or_else(MatchResult::no_match)
    }
}
