//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{FaqMatcherArgs, OutputFormat};
use crate::error::Result;
use crate::faq::Faq;
use crate::matching::{MatchDetails, MatchResult, RankedFaq};
use crate::responder::Reply;
use crate::stats::MatchStats;

/// Result structure for the analyze command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub normalizer: String,
    pub normalized: String,
    pub tokens: Vec<String>,
}

/// Something the CLI can print in either output format.
pub trait Render: Serialize {
    /// Print in human-readable form.
    fn render_human(&self, args: &FaqMatcherArgs);
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Render>(result: &T, args: &FaqMatcherArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.render_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FaqMatcherArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn details_line(details: &MatchDetails) -> String {
    format!(
        "exact: {}, synonym: {}, category: {}",
        details.exact_matches,
        details.synonym_matches,
        if details.category_match { "yes" } else { "no" }
    )
}

/// A best-match result together with the FAQ it names.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BestMatchOutput<'a> {
    pub result: MatchResult,
    #[serde(skip)]
    pub faq: Option<&'a Faq>,
}

impl Render for BestMatchOutput<'_> {
    fn render_human(&self, args: &FaqMatcherArgs) {
        match self.faq {
            Some(faq) => {
                println!("Matched FAQ: {} (Score: {})", faq.id, self.result.score);
                println!("─────────────");
                println!("Q: {}", faq.question);
                println!("A: {}", faq.answer);
                if args.verbosity() > 1 {
                    println!();
                    println!("Matched keywords: {}", self.result.matched_keywords.join(", "));
                    println!("Details: {}", details_line(&self.result.match_details));
                }
            }
            None => println!("No matching FAQ."),
        }
    }
}

impl Render for Vec<RankedFaq<'_>> {
    fn render_human(&self, _args: &FaqMatcherArgs) {
        println!("Ranking:");
        println!("════════");

        for (i, entry) in self.iter().enumerate() {
            println!();
            println!(
                "{}. {} (Score: {})",
                i + 1,
                entry.result.faq_id,
                entry.result.score
            );
            println!("   Q: {}", entry.faq.question);
            println!("   {}", details_line(&entry.result.match_details));
            if !entry.result.matched_keywords.is_empty() {
                println!("   Keywords: {}", entry.result.matched_keywords.join(", "));
            }
        }

        println!();
        println!("Total FAQs: {}", self.len());
    }
}

impl Render for Reply<'_> {
    fn render_human(&self, args: &FaqMatcherArgs) {
        match self {
            Reply::Faq { faq, result } => BestMatchOutput {
                result: MatchResult::from(result.clone()),
                faq: Some(*faq),
            }
            .render_human(args),
            Reply::Generated { text, generator } => {
                println!("No matching FAQ. Generated answer ({generator}):");
                println!("─────────────");
                println!("{text}");
            }
        }
    }
}

impl Render for AnalysisResult {
    fn render_human(&self, _args: &FaqMatcherArgs) {
        println!("Normalizer: {}", self.normalizer);
        println!("Normalized: {}", self.normalized);
        println!("Tokens ({}): {}", self.tokens.len(), self.tokens.join(" | "));
    }
}

impl Render for MatchStats {
    fn render_human(&self, _args: &FaqMatcherArgs) {
        println!("Match Statistics:");
        println!("═════════════════");
        println!("Messages: {}", self.total_messages);
        println!("Answered: {}", self.answered);
        println!("Auto-answer rate: {:.1}%", self.auto_answer_rate * 100.0);

        if !self.top_keywords.is_empty() {
            println!();
            println!("Top keywords:");
            println!("─────────────");
            for entry in &self.top_keywords {
                println!("  {} ({})", entry.label, entry.count);
            }
        }

        if !self.top_questions.is_empty() {
            println!();
            println!("Top questions:");
            println!("──────────────");
            for entry in &self.top_questions {
                println!("  {} ({})", entry.label, entry.count);
            }
        }
    }
}
