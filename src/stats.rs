//! Aggregate statistics over a batch of messages.
//!
//! Each message is matched independently (in parallel with rayon), then the
//! results are folded into counts: how many messages were answered from the
//! catalog, which keywords triggered the answers and which questions were
//! answered most.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::faq::Faq;
use crate::matching::Ranker;

/// A label with the number of times it occurred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// Batch matching statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    /// Number of messages processed
    pub total_messages: u64,
    /// Messages for which an FAQ cleared the threshold
    pub answered: u64,
    /// `answered / total_messages`, 0.0 for an empty batch
    pub auto_answer_rate: f64,
    /// Matched keywords of answered messages, most frequent first
    pub top_keywords: Vec<LabelCount>,
    /// Questions of the winning FAQs, most frequent first
    pub top_questions: Vec<LabelCount>,
}

impl MatchStats {
    /// Match every message and summarize, keeping the `top_n` most frequent
    /// keywords and questions.
    pub fn collect<S>(messages: &[S], faqs: &[Faq], config: &RulesConfig, top_n: usize) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let ranker = Ranker::new(config);

        let winners: Vec<Option<(&Faq, Vec<String>)>> = messages
            .par_iter()
            .map(|message| {
                ranker
                    .best_ranked(message.as_ref(), faqs)
                    .map(|best| (best.faq, best.result.matched_keywords))
            })
            .collect();

        let mut keyword_counts: HashMap<String, u64> = HashMap::new();
        let mut question_counts: HashMap<String, u64> = HashMap::new();
        let mut answered = 0u64;

        for (faq, matched_keywords) in winners.into_iter().flatten() {
            answered += 1;
            *question_counts.entry(faq.question.clone()).or_default() += 1;
            for keyword in matched_keywords {
                *keyword_counts.entry(keyword).or_default() += 1;
            }
        }

        let total_messages = messages.len() as u64;
        let auto_answer_rate = if total_messages == 0 {
            0.0
        } else {
            answered as f64 / total_messages as f64
        };

        tracing::debug!(total_messages, answered, "collected match statistics");

        MatchStats {
            total_messages,
            answered,
            auto_answer_rate,
            top_keywords: top_counts(keyword_counts, top_n),
            top_questions: top_counts(question_counts, top_n),
        }
    }
}

/// Sort counts descending, breaking ties by label, and keep the first `n`.
fn top_counts(counts: HashMap<String, u64>, n: usize) -> Vec<LabelCount> {
    let mut entries: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries.truncate(n);
    entries
}
